// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! SerpAPI search provider
//!
//! Queries Google through SerpAPI and maps its organic results.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const SERPAPI_URL: &str = "https://serpapi.com/search";

/// SerpAPI (Google engine) search provider
pub struct SerpApiProvider {
    api_key: String,
    client: Client,
    timeout_ms: u64,
}

impl SerpApiProvider {
    /// Create a new SerpAPI provider
    ///
    /// # Arguments
    /// * `api_key` - SerpAPI key
    /// * `timeout_ms` - Per-request timeout
    pub fn new(api_key: String, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            client,
            timeout_ms,
        }
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if self.api_key.is_empty() {
            return Err(SearchError::NoApiKey {
                provider: self.name().to_string(),
            });
        }

        let num = num_results.to_string();
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("engine", "google"),
                ("num", num.as_str()),
                ("gl", "us"),
                ("hl", "en"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| SearchError::ApiError {
            status: 0,
            message: e.to_string(),
        })?;

        parse_serpapi_response(&body, num_results)
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn priority(&self) -> u8 {
        10
    }
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiResult>,
}

#[derive(Debug, Deserialize)]
struct SerpApiResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Map a SerpAPI JSON body to search results, keeping at most `max_results`
fn parse_serpapi_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let data: SerpApiResponse =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse {
            provider: "serpapi".to_string(),
            message: e.to_string(),
        })?;

    Ok(data
        .organic_results
        .into_iter()
        .take(max_results)
        .map(|r| SearchResult {
            title: r.title,
            url: r.link,
            snippet: r.snippet,
        })
        .collect())
}
