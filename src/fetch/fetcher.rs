// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching
//!
//! Fetches a page and hands the body to the extractor. Every failure becomes a
//! [`FetchResult::Failure`]; nothing here returns an error to the caller.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::config::FetchConfig;
use super::extractor::parse_page;
use super::types::FetchResult;

/// Page fetch error types
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request timed out
    Timeout(String),
    /// HTTP transport error
    HttpError(String),
    /// HTTP status other than 200
    HttpStatus(u16),
    /// URL is unsafe (localhost, private IP, non-http scheme)
    UnsafeUrl(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(url) => write!(f, "Timeout fetching: {}", url),
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::HttpStatus(code) => write!(f, "Failed to retrieve content: HTTP {}", code),
            Self::UnsafeUrl(url) => write!(f, "Unsafe URL blocked: {}", url),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of parsed pages
///
/// Implementations must never panic or return an error: failures are
/// reported through [`FetchResult::Failure`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch and parse a single URL
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Fetcher backed by reqwest and the scraper-based extractor
pub struct HttpPageFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpPageFetcher {
    /// Create a new HTTP page fetcher
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self { client, config }
    }

    /// Download the body of `url`
    async fn download(&self, url: &str) -> Result<String, FetchError> {
        if !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))
    }

    /// Check if URL is safe to fetch (http/https, not localhost or private network)
    pub fn is_safe_url(url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !["http", "https"].contains(&parsed.scheme()) {
            return false;
        }

        match parsed.host() {
            Some(url::Host::Domain(domain)) => {
                let domain = domain.to_lowercase();
                domain != "localhost" && !domain.ends_with(".localhost")
            }
            Some(url::Host::Ipv4(ip)) => {
                !(ip.is_loopback()
                    || ip.is_private()
                    || ip.is_link_local()
                    || ip.is_unspecified()
                    || ip.is_broadcast())
            }
            Some(url::Host::Ipv6(ip)) => !(ip.is_loopback() || ip.is_unspecified()),
            None => false,
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        debug!("Fetching content from: {}", url);

        match self.download(url).await {
            Ok(html) => {
                let page = parse_page(&html, url, self.config.max_content_length);
                info!(
                    "Fetched {} chars of main text from: {}",
                    page.content.main_text.len(),
                    url
                );
                FetchResult::Success(page)
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", url, e);
                FetchResult::Failure {
                    url: url.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}
