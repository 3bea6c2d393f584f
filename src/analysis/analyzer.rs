// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content analyzer composing relevance, reliability, sentiment and entities

use std::sync::Arc;
use tracing::debug;

use super::config::AnalysisConfig;
use super::entities::{EntityExtractor, StaticEntityExtractor};
use super::relevance::{extract_key_points, score_relevance};
use super::reliability::assess_reliability;
use super::sentiment::classify_sentiment;
use super::types::{Analysis, SourceRef};
use crate::fetch::FetchResult;

/// Produces one [`Analysis`] per fetched page
#[derive(Clone)]
pub struct ContentAnalyzer {
    config: Arc<AnalysisConfig>,
    entities: Arc<dyn EntityExtractor>,
}

impl ContentAnalyzer {
    /// Analyzer using the placeholder entity extractor
    pub fn new(config: Arc<AnalysisConfig>) -> Self {
        Self::with_entity_extractor(config, Arc::new(StaticEntityExtractor))
    }

    pub fn with_entity_extractor(
        config: Arc<AnalysisConfig>,
        entities: Arc<dyn EntityExtractor>,
    ) -> Self {
        Self { config, entities }
    }

    /// Analyze one fetch result against `query`
    ///
    /// Never fails: failed fetches and empty pages yield an unsuccessful
    /// analysis with zero relevance and no key points.
    pub fn analyze(&self, fetch_result: &FetchResult, query: &str) -> Analysis {
        let page = match fetch_result {
            FetchResult::Success(page) => page,
            FetchResult::Failure { url, .. } => {
                return Analysis::failed(
                    SourceRef {
                        url: url.clone(),
                        title: None,
                    },
                    "No valid content to analyze",
                );
            }
        };

        let source = SourceRef {
            url: page.url.clone(),
            title: page.metadata.title.clone(),
        };

        let text = page.content.main_text.as_str();
        if text.trim().is_empty() {
            return Analysis::failed(source, "No text content to analyze");
        }

        let analysis = Analysis {
            relevance_score: score_relevance(text, query),
            reliability_score: assess_reliability(
                Some(&page.metadata),
                &page.url,
                &self.config.reliable_domains,
            ),
            key_points: extract_key_points(text, query),
            sentiment: classify_sentiment(
                text,
                &self.config.positive_words,
                &self.config.negative_words,
            ),
            entities: self.entities.extract(text),
            source,
            success: true,
            error: None,
        };

        debug!(
            url = %analysis.source.url,
            relevance = analysis.relevance_score,
            reliability = analysis.reliability_score,
            key_points = analysis.key_points.len(),
            "Analyzed page"
        );

        analysis
    }

    /// Analyze every fetch result and order by relevance, highest first
    ///
    /// The sort is stable, so equally relevant pages keep input order.
    pub fn analyze_batch(&self, fetch_results: &[FetchResult], query: &str) -> Vec<Analysis> {
        let mut analyses: Vec<Analysis> = fetch_results
            .iter()
            .map(|result| self.analyze(result, query))
            .collect();

        analyses.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        analyses
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(AnalysisConfig::default()))
    }
}
