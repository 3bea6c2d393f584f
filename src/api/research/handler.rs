// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info, warn};

use super::request::ResearchApiRequest;
use crate::agent::ResearchOutcome;
use crate::api::errors::ApiError;
use crate::api::server::AppState;

/// POST /api/research - Research a query
///
/// # Request
/// - `query`: Research query string (required, max 500 chars)
///
/// # Response
/// - `success`: Whether a report was produced
/// - `error`: Failure message (omitted on success)
/// - `report`: The research report, `null` on failure
///
/// Pipeline failures such as "No search results found" are reported with
/// status 200 and `success: false`.
///
/// # Errors
/// - 400 Bad Request: Missing, empty or oversized query
/// - 500 Internal Server Error: The research pipeline faulted
pub async fn research_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResearchApiRequest>, JsonRejection>,
) -> Result<Json<ResearchOutcome>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected research body: {}", e);
        ApiError::missing_query()
    })?;

    let query = request.validate().map_err(|e| {
        warn!("Research validation failed: {}", e);
        ApiError::BadRequest(e)
    })?;
    debug!("Research request: {:?}", query);

    match state.agent.run(query).await {
        Err(e) if e.is_internal() => Err(ApiError::InternalError(e.to_string())),
        result => {
            if let Ok(ref report) = result {
                info!(
                    "Research complete for '{}': {} sources",
                    query,
                    report.sources.len()
                );
            }
            Ok(Json(ResearchOutcome::from(result)))
        }
    }
}
