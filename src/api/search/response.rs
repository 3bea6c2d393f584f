// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API response types

use serde::{Deserialize, Serialize};

use crate::search::{SearchResponse, SearchResult};

/// Response body for POST /api/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiResponse {
    pub success: bool,

    /// The original search query
    pub query: String,

    /// List of search results
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub result_count: usize,

    /// Time taken for the search in milliseconds
    pub search_time_ms: u64,

    /// Provider that produced the real results, "none" if no provider did
    pub provider: String,

    /// Number of placeholder results appended by the fallback
    pub fallback_count: usize,
}

impl From<SearchResponse> for SearchApiResponse {
    fn from(response: SearchResponse) -> Self {
        Self {
            success: true,
            result_count: response.result_count(),
            query: response.query,
            results: response.results,
            search_time_ms: response.search_time_ms,
            provider: response.provider,
            fallback_count: response.fallback_count,
        }
    }
}
