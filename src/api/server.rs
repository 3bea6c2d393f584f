// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::health_handler;
use super::research::research_handler;
use super::search::search_handler;
use crate::agent::ResearchAgent;
use crate::config::ApiConfig;
use crate::search::SearchService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<ResearchAgent>,
    pub search: Arc<SearchService>,
}

impl AppState {
    /// State sharing the agent's own search service with the search endpoint
    pub fn new(agent: Arc<ResearchAgent>) -> Self {
        let search = agent.search_service().clone();
        Self { agent, search }
    }
}

/// Build the API router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/research", post(research_handler))
        .route("/api/search", post(search_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until Ctrl+C
pub async fn start_server(config: &ApiConfig, state: AppState) -> Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Web Research Agent API listening on {}", addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;

    Ok(())
}
