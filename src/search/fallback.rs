// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fallback strategies for short or missing provider results
//!
//! Downstream stages expect a non-empty result list even when no provider is
//! reachable. [`PlaceholderFallback`] produces clearly fabricated, deterministic
//! placeholder results for that case; [`NoFallback`] disables padding.

use crate::text::capitalize;

use super::config::SearchConfig;
use super::types::SearchResult;

const TITLE_SUFFIX_TERMS: [&str; 5] = ["information", "guide", "overview", "analysis", "report"];

/// Strategy used by the search service to pad provider results
pub trait FallbackStrategy: Send + Sync {
    /// Generate up to `count` results for `query`
    fn generate(&self, query: &str, count: usize) -> Vec<SearchResult>;

    /// Name used in logs and in `SearchResponse::provider`
    fn name(&self) -> &'static str;
}

/// Deterministic placeholder results (mock data, not real search hits)
///
/// Generates at most one result per domain in its pool.
#[derive(Debug, Clone)]
pub struct PlaceholderFallback {
    domains: Vec<String>,
}

impl PlaceholderFallback {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }
}

impl Default for PlaceholderFallback {
    /// Uses the configured default domain pool
    fn default() -> Self {
        Self::new(SearchConfig::default().placeholder_domains)
    }
}

impl FallbackStrategy for PlaceholderFallback {
    fn generate(&self, query: &str, count: usize) -> Vec<SearchResult> {
        let words: Vec<&str> = query.split_whitespace().collect();
        let title_terms: Vec<&str> = words
            .iter()
            .copied()
            .chain(TITLE_SUFFIX_TERMS.iter().copied())
            .collect();
        let url_path = words.join("-");
        let snippet = format!(
            "Comprehensive information about {query}. This article provides detailed analysis \
             and insights into {query} with expert opinions and recent developments."
        );

        self.domains
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, domain)| {
                let title = title_terms
                    .iter()
                    .take(3 + i % 3)
                    .map(|t| capitalize(t))
                    .collect::<Vec<_>>()
                    .join(" ");

                SearchResult {
                    title,
                    url: format!("https://www.{}/articles/{}-{}", domain, url_path, i + 1),
                    snippet: snippet.clone(),
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Never pads; an unreachable provider yields an empty result list
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFallback;

impl FallbackStrategy for NoFallback {
    fn generate(&self, _query: &str, _count: usize) -> Vec<SearchResult> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
