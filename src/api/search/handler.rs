// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info, warn};

use super::request::SearchApiRequest;
use super::response::SearchApiResponse;
use crate::api::errors::ApiError;
use crate::api::server::AppState;

/// POST /api/search - Perform web search only
///
/// # Request
/// - `query`: Search query string (required, max 500 chars)
/// - `num_results`: Number of results (1-20, default from configuration)
///
/// # Response
/// - `success`: Always true
/// - `query`: Original search query
/// - `results`: Array of search results with title, url, snippet
/// - `result_count`, `search_time_ms`, `provider`, `fallback_count`
///
/// # Errors
/// - 400 Bad Request: Invalid query or parameters
pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchApiRequest>, JsonRejection>,
) -> Result<Json<SearchApiResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected search body: {}", e);
        ApiError::missing_query()
    })?;

    let query = request.validate().map_err(|e| {
        warn!("Search validation failed: {}", e);
        ApiError::BadRequest(e)
    })?;
    debug!("Search request: {:?}", query);

    let response = state.search.search(query, request.num_results).await;

    info!(
        "Search complete: {} results for '{}' in {}ms",
        response.result_count(),
        query,
        response.search_time_ms
    );

    Ok(Json(response.into()))
}
