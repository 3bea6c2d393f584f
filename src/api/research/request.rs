// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API request types

use serde::{Deserialize, Serialize};

use crate::api::validation::validate_query;

/// Request body for POST /api/research
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchApiRequest {
    /// Research query (required, max 500 chars)
    #[serde(default)]
    pub query: Option<String>,
}

impl ResearchApiRequest {
    /// Validate the request, returning the query on success
    pub fn validate(&self) -> Result<&str, String> {
        let query = self
            .query
            .as_deref()
            .ok_or_else(|| "Missing query parameter".to_string())?;
        validate_query(query)?;
        Ok(query.trim())
    }
}
