// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API
//!
//! - `GET /api/health`
//! - `POST /api/research`: full research pipeline
//! - `POST /api/search`: search only

pub mod errors;
pub mod handlers;
pub mod research;
pub mod search;
pub mod server;
pub mod validation;

pub use errors::{ApiError, ErrorBody};
pub use handlers::{health_handler, HealthResponse};
pub use research::{research_handler, ResearchApiRequest};
pub use search::{search_handler, SearchApiRequest, SearchApiResponse};
pub use server::{create_app, start_server, AppState};
