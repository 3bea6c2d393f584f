// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service orchestration
//!
//! Coordinates search providers, rate limiting and the fallback strategy.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::fallback::{FallbackStrategy, NoFallback, PlaceholderFallback};
use super::provider::SearchProvider;
use super::rate_limiter::SearchRateLimiter;
use super::serpapi::SerpApiProvider;
use super::types::{SearchResponse, SearchResult};

/// Search service that never fails: provider errors degrade to the fallback
pub struct SearchService {
    providers: Vec<Box<dyn SearchProvider>>,
    fallback: Box<dyn FallbackStrategy>,
    rate_limiter: SearchRateLimiter,
    config: SearchConfig,
}

impl SearchService {
    /// Create a search service from configuration
    pub fn new(config: SearchConfig) -> Self {
        let mut providers: Vec<Box<dyn SearchProvider>> = Vec::new();

        if let Some(ref api_key) = config.serpapi_key {
            if !api_key.is_empty() {
                providers.push(Box::new(SerpApiProvider::new(
                    api_key.clone(),
                    config.request_timeout_ms,
                )));
                debug!("SerpAPI provider enabled");
            }
        }

        let fallback: Box<dyn FallbackStrategy> = if config.fallback_enabled {
            debug!("Placeholder fallback enabled");
            Box::new(PlaceholderFallback::new(config.placeholder_domains.clone()))
        } else {
            Box::new(NoFallback)
        };

        Self::with_providers(config, providers, fallback)
    }

    /// Create a search service with explicit providers and fallback strategy
    pub fn with_providers(
        config: SearchConfig,
        mut providers: Vec<Box<dyn SearchProvider>>,
        fallback: Box<dyn FallbackStrategy>,
    ) -> Self {
        // Sort by priority (lower = preferred)
        providers.sort_by_key(|p| p.priority());
        let rate_limiter = SearchRateLimiter::new(config.rate_limit_per_minute);

        Self {
            providers,
            fallback,
            rate_limiter,
            config,
        }
    }

    /// Perform a search
    ///
    /// Returns at most `num_results` results (configured default if `None`).
    /// Real results come first; the fallback strategy pads the remainder.
    pub async fn search(&self, query: &str, num_results: Option<usize>) -> SearchResponse {
        let num_results = num_results.unwrap_or(self.config.default_num_results);
        let start = Instant::now();

        let (mut results, provider) = self.search_providers(query, num_results).await;

        let mut fallback_count = 0;
        if results.len() < num_results {
            let missing = num_results - results.len();
            let padding = self.fallback.generate(query, missing);
            fallback_count = padding.len();
            if fallback_count > 0 {
                warn!(
                    "Padding {} of {} results for '{}' with {} fallback results",
                    fallback_count,
                    num_results,
                    query,
                    self.fallback.name()
                );
            }
            results.extend(padding);
        }
        results.truncate(num_results);
        fallback_count = fallback_count.min(results.len());

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Search complete: {} results ({} fallback) from {} in {}ms",
            results.len(),
            fallback_count,
            provider,
            elapsed_ms
        );

        SearchResponse {
            query: query.to_string(),
            results,
            search_time_ms: elapsed_ms,
            provider,
            fallback_count,
        }
    }

    /// Try providers in priority order, returning the first success
    async fn search_providers(
        &self,
        query: &str,
        num_results: usize,
    ) -> (Vec<SearchResult>, String) {
        for provider in &self.providers {
            if !provider.is_available() {
                continue;
            }

            self.rate_limiter.wait().await;
            debug!("Trying search provider: {}", provider.name());

            match provider.search(query, num_results).await {
                Ok(mut results) => {
                    results.truncate(num_results);
                    return (results, provider.name().to_string());
                }
                Err(e) => {
                    warn!(
                        "Search provider {} failed: {}, trying next",
                        provider.name(),
                        e
                    );
                }
            }
        }

        (Vec::new(), "none".to_string())
    }

    /// Get list of available provider names
    pub fn available_providers(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::SearchError;
    use async_trait::async_trait;

    struct FixedProvider {
        name: &'static str,
        priority: u8,
        results: usize,
    }

    #[async_trait]
    impl SearchProvider for FixedProvider {
        async fn search(
            &self,
            _query: &str,
            _num_results: usize,
        ) -> Result<Vec<SearchResult>, SearchError> {
            Ok((0..self.results)
                .map(|i| SearchResult {
                    title: format!("{} {}", self.name, i),
                    url: format!("https://{}.example/{}", self.name, i),
                    snippet: String::new(),
                })
                .collect())
        }

        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            true
        }

        fn priority(&self) -> u8 {
            self.priority
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        async fn search(
            &self,
            _query: &str,
            _num_results: usize,
        ) -> Result<Vec<SearchResult>, SearchError> {
            Err(SearchError::ApiError {
                status: 503,
                message: "down".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn priority(&self) -> u8 {
            1
        }
    }

    #[test]
    fn test_service_without_key_has_no_providers() {
        let service = SearchService::new(SearchConfig::default());
        assert!(service.available_providers().is_empty());
    }

    #[test]
    fn test_service_with_key_registers_serpapi() {
        let mut config = SearchConfig::default();
        config.serpapi_key = Some("test-key".to_string());
        let service = SearchService::new(config);
        assert_eq!(service.available_providers(), vec!["serpapi"]);
    }

    #[tokio::test]
    async fn test_unreachable_provider_pads_with_placeholders() {
        let service = SearchService::new(SearchConfig::default());
        let response = service.search("rust language", Some(4)).await;

        assert_eq!(response.results.len(), 4);
        assert_eq!(response.fallback_count, 4);
        assert_eq!(response.provider, "none");
        assert!(response.is_fallback_only());
    }

    #[tokio::test]
    async fn test_placeholder_pool_comes_from_config() {
        let mut config = SearchConfig::default();
        config.placeholder_domains = vec!["example.org".to_string()];
        let service = SearchService::new(config);

        let response = service.search("rust", Some(3)).await;
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].url, "https://www.example.org/articles/rust-1");
    }

    #[tokio::test]
    async fn test_default_count_comes_from_config() {
        let mut config = SearchConfig::default();
        config.default_num_results = 3;
        let service = SearchService::new(config);

        let response = service.search("rust", None).await;
        assert_eq!(response.results.len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_disabled_returns_empty() {
        let mut config = SearchConfig::default();
        config.fallback_enabled = false;
        let service = SearchService::new(config);

        let response = service.search("rust", None).await;
        assert!(response.results.is_empty());
        assert_eq!(response.fallback_count, 0);
    }

    #[tokio::test]
    async fn test_partial_results_are_padded_after_real_ones() {
        let service = SearchService::with_providers(
            SearchConfig::default(),
            vec![Box::new(FixedProvider {
                name: "fixed",
                priority: 10,
                results: 2,
            })],
            Box::new(PlaceholderFallback::default()),
        );

        let response = service.search("rust", Some(5)).await;
        assert_eq!(response.results.len(), 5);
        assert_eq!(response.fallback_count, 3);
        assert_eq!(response.provider, "fixed");
        assert_eq!(response.results[0].title, "fixed 0");
        assert!(response.results[2].url.contains("wikipedia.org"));
    }

    #[tokio::test]
    async fn test_failover_to_next_provider() {
        let service = SearchService::with_providers(
            SearchConfig::default(),
            vec![
                Box::new(FixedProvider {
                    name: "backup",
                    priority: 50,
                    results: 10,
                }),
                Box::new(FailingProvider),
            ],
            Box::new(NoFallback),
        );

        let response = service.search("rust", Some(3)).await;
        assert_eq!(response.provider, "backup");
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.fallback_count, 0);
    }
}
