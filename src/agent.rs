// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research orchestrator
//!
//! Runs one query through the whole pipeline:
//!
//! ```text
//! query → intent → search → paced sequential fetch → analyze → synthesize → report
//! ```
//!
//! Every collaborator is injected, so tests can swap the network-facing
//! search provider and page fetcher for in-memory ones.

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::ContentAnalyzer;
use crate::config::{AgentConfig, ResearchConfig};
use crate::error::ResearchError;
use crate::fetch::{FetchResult, HttpPageFetcher, PageFetcher};
use crate::intent::classify_intent;
use crate::search::{SearchResult, SearchService};
use crate::synthesis::{Report, ReportSynthesizer};

/// Wire envelope for a research request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub report: Option<Report>,
}

impl From<Result<Report, ResearchError>> for ResearchOutcome {
    fn from(result: Result<Report, ResearchError>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                error: None,
                report: Some(report),
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                report: None,
            },
        }
    }
}

/// Orchestrates search, fetch, analysis and synthesis for a query
pub struct ResearchAgent {
    search: Arc<SearchService>,
    fetcher: Arc<dyn PageFetcher>,
    analyzer: ContentAnalyzer,
    synthesizer: ReportSynthesizer,
    config: AgentConfig,
}

impl ResearchAgent {
    pub fn new(
        search: Arc<SearchService>,
        fetcher: Arc<dyn PageFetcher>,
        analyzer: ContentAnalyzer,
        synthesizer: ReportSynthesizer,
        config: AgentConfig,
    ) -> Self {
        Self {
            search,
            fetcher,
            analyzer,
            synthesizer,
            config,
        }
    }

    /// Wire the production collaborators from configuration
    pub fn from_config(config: &ResearchConfig) -> Self {
        Self::with_search(Arc::new(SearchService::new(config.search.clone())), config)
    }

    /// Production fetcher and analyzer around an existing search service
    pub fn with_search(search: Arc<SearchService>, config: &ResearchConfig) -> Self {
        let analysis = Arc::new(config.analysis.clone());
        Self::new(
            search,
            Arc::new(HttpPageFetcher::new(config.fetch.clone())),
            ContentAnalyzer::new(analysis.clone()),
            ReportSynthesizer::new(analysis),
            config.agent.clone(),
        )
    }

    /// Search service used by this agent
    pub fn search_service(&self) -> &Arc<SearchService> {
        &self.search
    }

    /// Research a query, reporting failures in the returned envelope
    pub async fn process_query(&self, query: &str) -> ResearchOutcome {
        self.run(query).await.into()
    }

    /// Research a query
    ///
    /// Panics raised inside the pipeline are caught and reported as
    /// [`ResearchError::Internal`].
    pub async fn run(&self, query: &str) -> Result<Report, ResearchError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("research", %request_id, query = %query);

        let result = AssertUnwindSafe(self.pipeline(query))
            .catch_unwind()
            .instrument(span)
            .await
            .unwrap_or_else(|panic| {
                let message = panic_message(panic.as_ref());
                error!(%request_id, "Research pipeline panicked: {}", message);
                Err(ResearchError::Internal(message))
            });

        if let Err(ref e) = result {
            warn!(%request_id, "Research failed: {}", e);
        }
        result
    }

    async fn pipeline(&self, query: &str) -> Result<Report, ResearchError> {
        info!("Processing research query");
        let intent = classify_intent(query);
        debug!(query_type = ?intent.query_type, "Classified query intent");

        let response = self.search.search(query, None).await;
        if response.results.is_empty() {
            return Err(ResearchError::EmptySearchResults);
        }
        info!(
            results = response.result_count(),
            provider = %response.provider,
            fallback = response.fallback_count,
            "Search returned results"
        );

        let fetched = self.fetch_all(&response.results).await;
        let usable: Vec<FetchResult> = fetched
            .into_iter()
            .filter(|result| {
                if let FetchResult::Failure { url, error } = result {
                    let failure = ResearchError::FetchFailure {
                        url: url.clone(),
                        message: error.clone(),
                    };
                    warn!("{}", failure);
                    return false;
                }
                if !result.has_text() {
                    warn!(url = %result.url(), "Skipping page without text content");
                    return false;
                }
                true
            })
            .collect();

        if usable.is_empty() {
            return Err(ResearchError::NoAnalyzableContent);
        }

        let analyses = self.analyzer.analyze_batch(&usable, query);
        let mut report = self.synthesizer.synthesize(&analyses, query)?;
        report.search_results = response.results;
        report.query_intent = Some(intent);

        info!(
            sources = report.sources.len(),
            topics = report.topics.len(),
            "Research report ready"
        );
        Ok(report)
    }

    /// Fetch every result in order, pausing between successive requests
    async fn fetch_all(&self, results: &[SearchResult]) -> Vec<FetchResult> {
        let delay = Duration::from_millis(self.config.fetch_delay_ms);
        let mut fetched = Vec::with_capacity(results.len());

        for (i, result) in results.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            debug!(url = %result.url, "Fetching page {}/{}", i + 1, results.len());
            fetched.push(self.fetcher.fetch(&result.url).await);
        }

        fetched
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
