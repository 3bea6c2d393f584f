// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search functionality

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PLACEHOLDER_DOMAINS: [&str; 12] = [
    "wikipedia.org",
    "nytimes.com",
    "theguardian.com",
    "bbc.com",
    "reuters.com",
    "cnn.com",
    "washingtonpost.com",
    "medium.com",
    "forbes.com",
    "techcrunch.com",
    "wired.com",
    "scientificamerican.com",
];

/// Configuration for web search functionality
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// SerpAPI key; the SerpAPI provider is skipped when absent
    pub serpapi_key: Option<String>,
    /// Default number of results per search
    pub default_num_results: usize,
    /// Rate limit toward the search provider (requests per minute)
    pub rate_limit_per_minute: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Pad short or missing provider results with placeholder results
    pub fallback_enabled: bool,
    /// Domains cycled through by placeholder results, at most one result each
    pub placeholder_domains: Vec<String>,
}

impl SearchConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("SERPAPI_KEY") {
            if !key.trim().is_empty() {
                self.serpapi_key = Some(key);
            }
        }
        if let Some(n) = env::var("SEARCH_RESULT_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.default_num_results = n;
        }
        if let Some(rpm) = env::var("SEARCH_RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit_per_minute = rpm;
        }
        if let Some(secs) = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.request_timeout_ms = timeout_ms_from_secs(secs);
        }
        if let Ok(v) = env::var("SEARCH_FALLBACK_ENABLED") {
            self.fallback_enabled = v.to_lowercase() != "false";
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_num_results == 0 {
            return Err("default_num_results must be at least 1".to_string());
        }
        if self.rate_limit_per_minute == 0 {
            return Err("Rate limit must be greater than 0".to_string());
        }
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }
        if self.placeholder_domains.iter().any(|d| d.trim().is_empty()) {
            return Err("placeholder_domains cannot contain empty domains".to_string());
        }
        Ok(())
    }

    /// Check if a real search provider is configured
    pub fn has_any_provider(&self) -> bool {
        self.serpapi_key.is_some()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            default_num_results: 10,
            rate_limit_per_minute: 60,
            request_timeout_ms: 10000,
            fallback_enabled: true,
            placeholder_domains: DEFAULT_PLACEHOLDER_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

/// Seconds to milliseconds, saturating instead of overflowing
fn timeout_ms_from_secs(secs: u64) -> u64 {
    secs.saturating_mul(1000)
}
