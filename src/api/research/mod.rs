// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API endpoint
//!
//! Provides the `/api/research` HTTP endpoint.

pub mod handler;
pub mod request;

pub use handler::research_handler;
pub use request::ResearchApiRequest;
