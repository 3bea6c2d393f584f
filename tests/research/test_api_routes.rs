// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for the research API
//!
//! These tests verify that:
//! - Health responds with the service banner
//! - Research and search validate the query before doing any work
//! - Pipeline failures are reported as 200 with `success: false`
//! - Search returns padded placeholder results when no provider is configured

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use web_research_agent::{
    analysis::ContentAnalyzer,
    api::{create_app, AppState},
    config::AgentConfig,
    fetch::{FetchResult, PageFetcher},
    search::{FallbackStrategy, NoFallback, PlaceholderFallback, SearchConfig, SearchService},
    synthesis::ReportSynthesizer,
    ResearchAgent,
};

struct UnreachableFetcher;

#[async_trait]
impl PageFetcher for UnreachableFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        FetchResult::Failure {
            url: url.to_string(),
            error: "Failed to retrieve content: HTTP 503".to_string(),
        }
    }
}

/// Helper: router over an agent whose search uses the given fallback
fn app_with(fallback: Box<dyn FallbackStrategy>) -> Router {
    let search = Arc::new(SearchService::with_providers(
        SearchConfig::default(),
        vec![],
        fallback,
    ));
    let agent = ResearchAgent::new(
        search,
        Arc::new(UnreachableFetcher),
        ContentAnalyzer::default(),
        ReportSynthesizer::default(),
        AgentConfig { fetch_delay_ms: 0 },
    );
    create_app(AppState::new(Arc::new(agent)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app_with(Box::new(NoFallback)), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Web Research Agent API is running");
}

#[tokio::test]
async fn test_research_empty_query_rejected() {
    let (status, json) = send(
        app_with(Box::new(NoFallback)),
        post_json("/api/research", r#"{"query": "   "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Query cannot be empty");
}

#[tokio::test]
async fn test_research_missing_query_rejected() {
    let (status, json) = send(
        app_with(Box::new(NoFallback)),
        post_json("/api/research", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing query parameter");
}

#[tokio::test]
async fn test_research_malformed_body_rejected() {
    let (status, json) = send(
        app_with(Box::new(NoFallback)),
        post_json("/api/research", "not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing query parameter");
}

#[tokio::test]
async fn test_research_query_too_long_rejected() {
    let body = serde_json::json!({ "query": "a".repeat(501) }).to_string();
    let (status, json) = send(
        app_with(Box::new(NoFallback)),
        post_json("/api/research", &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_research_no_results_is_200_failure() {
    let (status, json) = send(
        app_with(Box::new(NoFallback)),
        post_json("/api/research", r#"{"query": "rust ownership"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No search results found");
    assert!(json["report"].is_null());
}

#[tokio::test]
async fn test_research_unreachable_pages_is_200_failure() {
    let (status, json) = send(
        app_with(Box::new(PlaceholderFallback::default())),
        post_json("/api/research", r#"{"query": "rust ownership"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to scrape content from search results");
}

#[tokio::test]
async fn test_search_returns_placeholder_results() {
    let (status, json) = send(
        app_with(Box::new(PlaceholderFallback::default())),
        post_json("/api/search", r#"{"query": "rust", "num_results": 2}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["provider"], "none");
    assert_eq!(json["fallback_count"], 2);
}

#[tokio::test]
async fn test_search_num_results_out_of_range() {
    let (status, json) = send(
        app_with(Box::new(PlaceholderFallback::default())),
        post_json("/api/search", r#"{"query": "rust", "num_results": 21}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "num_results cannot exceed 20");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app_with(Box::new(NoFallback)), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
