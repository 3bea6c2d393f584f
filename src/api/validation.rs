// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query checks shared by the research and search endpoints

/// Longest accepted query, in characters
pub const MAX_QUERY_CHARS: usize = 500;

/// Validate a query string
pub fn validate_query(query: &str) -> Result<(), String> {
    if query.trim().is_empty() {
        return Err("Query cannot be empty".to_string());
    }
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(format!(
            "Query too long (max {} characters)",
            MAX_QUERY_CHARS
        ));
    }
    Ok(())
}
