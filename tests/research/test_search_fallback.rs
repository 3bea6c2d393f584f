// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Search service failover and placeholder padding

use async_trait::async_trait;
use web_research_agent::search::{
    FallbackStrategy, NoFallback, PlaceholderFallback, SearchConfig, SearchError,
    SearchProvider, SearchResult, SearchService,
};

struct DownProvider;

#[async_trait]
impl SearchProvider for DownProvider {
    async fn search(
        &self,
        _query: &str,
        _num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::ApiError {
            status: 503,
            message: "Service Unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "down"
    }

    fn is_available(&self) -> bool {
        true
    }
}

struct OneResultProvider;

#[async_trait]
impl SearchProvider for OneResultProvider {
    async fn search(
        &self,
        query: &str,
        _num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(vec![SearchResult {
            title: format!("Real result for {}", query),
            url: "https://real.example/1".to_string(),
            snippet: "A real snippet".to_string(),
        }])
    }

    fn name(&self) -> &'static str {
        "one"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        50
    }
}

#[tokio::test]
async fn test_placeholder_is_deterministic_and_pads_to_count() {
    let service = SearchService::with_providers(
        SearchConfig::default(),
        vec![],
        Box::new(PlaceholderFallback::default()),
    );

    let first = service.search("machine learning", Some(5)).await;
    let second = service.search("machine learning", Some(5)).await;

    assert_eq!(first.results, second.results);
    assert_eq!(first.result_count(), 5);
    assert_eq!(first.fallback_count, 5);
    assert_eq!(first.provider, "none");
    assert!(first.is_fallback_only());
    assert_eq!(first.results[0].title, "Machine Learning Information");
    assert_eq!(
        first.results[1].url,
        "https://www.nytimes.com/articles/machine-learning-2"
    );
}

#[tokio::test]
async fn test_failing_provider_falls_through_to_next() {
    let service = SearchService::with_providers(
        SearchConfig::default(),
        vec![Box::new(OneResultProvider), Box::new(DownProvider)],
        Box::new(PlaceholderFallback::default()),
    );

    let response = service.search("rust", Some(3)).await;
    assert_eq!(response.provider, "one");
    assert_eq!(response.result_count(), 3);
    assert_eq!(response.fallback_count, 2);
    assert_eq!(response.results[0].url, "https://real.example/1");
}

#[tokio::test]
async fn test_no_fallback_leaves_results_empty() {
    let service = SearchService::with_providers(
        SearchConfig::default(),
        vec![Box::new(DownProvider)],
        Box::new(NoFallback),
    );

    let response = service.search("rust", None).await;
    assert!(response.results.is_empty());
    assert_eq!(response.fallback_count, 0);
}

#[test]
fn test_placeholder_capped_at_domain_pool() {
    let results = PlaceholderFallback::default().generate("rust", 50);
    assert_eq!(results.len(), 12);
    assert!(results[11].url.contains("scientificamerican.com"));
}
