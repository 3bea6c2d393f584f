// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for web search functionality

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single search result from a web search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,
    /// URL of the search result
    pub url: String,
    /// Snippet/description of the search result
    pub snippet: String,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The original search query
    pub query: String,
    /// List of search results, real results first, placeholders after
    pub results: Vec<SearchResult>,
    /// Time taken for the search in milliseconds
    pub search_time_ms: u64,
    /// Provider that returned the real results ("none" if no provider answered)
    pub provider: String,
    /// Number of placeholder results appended by the fallback strategy
    pub fallback_count: usize,
}

impl SearchResponse {
    /// Number of results returned
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// True when every result came from the fallback strategy
    pub fn is_fallback_only(&self) -> bool {
        !self.results.is_empty() && self.fallback_count == self.results.len()
    }
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// API error from the search provider
    #[error("Search API error: {status} - {message}")]
    ApiError {
        /// HTTP status code (0 for transport errors)
        status: u16,
        /// Error message
        message: String,
    },

    /// Search request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// No API key configured for the provider
    #[error("No API key configured for {provider}")]
    NoApiKey {
        /// Name of the provider missing API key
        provider: String,
    },

    /// Provider answered with a body we could not understand
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// Name of the provider
        provider: String,
        /// Parse error
        message: String,
    },
}
