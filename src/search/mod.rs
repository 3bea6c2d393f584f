// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search module
//!
//! Retrieves candidate pages for a research query:
//! - SerpAPI (Google) provider behind the [`provider::SearchProvider`] trait
//! - Provider failover by priority
//! - Rate limiting toward the provider
//! - Explicit, injectable placeholder fallback when providers come up short

pub mod config;
pub mod fallback;
pub mod provider;
pub mod rate_limiter;
pub mod serpapi;
pub mod service;
pub mod types;

pub use config::SearchConfig;
pub use fallback::{FallbackStrategy, NoFallback, PlaceholderFallback};
pub use provider::SearchProvider;
pub use service::SearchService;
pub use types::{SearchError, SearchResponse, SearchResult};
