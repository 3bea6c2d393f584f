// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page fetching module
//!
//! Downloads search result pages and normalizes them for analysis.
//!
//! ## Architecture
//!
//! ```text
//! Search Results (URLs) → PageFetcher → HTML → extractor → FetchResult
//!                                                  ↓
//!                           PageContent + PageMetadata + JSON-LD blocks
//! ```
//!
//! Fetches are issued one at a time by the research agent, which paces them
//! with a politeness delay.

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod types;

pub use config::FetchConfig;
pub use extractor::parse_page;
pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use types::{FetchResult, FetchedPage, Heading, Image, Link, PageContent, PageMetadata};
