// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API request types

use serde::{Deserialize, Serialize};

use crate::api::validation::validate_query;

/// Upper bound on `num_results`
pub const MAX_NUM_RESULTS: usize = 20;

/// Request body for POST /api/search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchApiRequest {
    /// Search query string (required, max 500 chars)
    #[serde(default)]
    pub query: Option<String>,

    /// Number of results to return (1-20, configured default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_results: Option<usize>,
}

impl SearchApiRequest {
    /// Validate the request, returning the query on success
    pub fn validate(&self) -> Result<&str, String> {
        let query = self
            .query
            .as_deref()
            .ok_or_else(|| "Missing query parameter".to_string())?;
        validate_query(query)?;

        if let Some(n) = self.num_results {
            if n < 1 {
                return Err("num_results must be at least 1".to_string());
            }
            if n > MAX_NUM_RESULTS {
                return Err(format!("num_results cannot exceed {}", MAX_NUM_RESULTS));
            }
        }
        Ok(query.trim())
    }
}
