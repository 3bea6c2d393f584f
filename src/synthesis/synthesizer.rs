// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report synthesis

use std::sync::Arc;
use tracing::debug;

use super::conclusions::{ConclusionGenerator, TemplateConclusions};
use super::summary::generate_summary;
use super::topics::organize_by_topic;
use super::types::{KeyPoint, Report, SourceSummary};
use crate::analysis::{Analysis, AnalysisConfig};
use crate::error::ResearchError;

/// Analyses scoring below this relevance are left out of the report
pub const RELEVANCE_FLOOR: f64 = 0.2;

const UNTITLED: &str = "Untitled";

/// Merges analyses into a single report
#[derive(Clone)]
pub struct ReportSynthesizer {
    config: Arc<AnalysisConfig>,
    conclusions: Arc<dyn ConclusionGenerator>,
}

impl ReportSynthesizer {
    pub fn new(config: Arc<AnalysisConfig>) -> Self {
        Self::with_conclusion_generator(config, Arc::new(TemplateConclusions))
    }

    pub fn with_conclusion_generator(
        config: Arc<AnalysisConfig>,
        conclusions: Arc<dyn ConclusionGenerator>,
    ) -> Self {
        Self {
            config,
            conclusions,
        }
    }

    /// Build a report from relevance-ordered analyses
    ///
    /// Only an empty batch is an error. When every analysis falls below
    /// [`RELEVANCE_FLOOR`] the report is returned with a "no relevant
    /// information" summary and no topics or sources.
    pub fn synthesize(&self, analyses: &[Analysis], query: &str) -> Result<Report, ResearchError> {
        if analyses.is_empty() {
            return Err(ResearchError::SynthesisInputEmpty);
        }

        let mut sources = Vec::new();
        let mut key_points = Vec::new();

        for analysis in analyses
            .iter()
            .filter(|a| a.relevance_score >= RELEVANCE_FLOOR)
        {
            let title = analysis
                .source
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED.to_string());

            key_points.extend(analysis.key_points.iter().map(|text| KeyPoint {
                text: text.clone(),
                source_title: title.clone(),
                source_url: analysis.source.url.clone(),
            }));

            sources.push(SourceSummary {
                title,
                url: analysis.source.url.clone(),
                relevance: analysis.relevance_score,
                reliability: analysis.reliability_score,
            });
        }

        debug!(
            analyses = analyses.len(),
            sources = sources.len(),
            key_points = key_points.len(),
            "Synthesizing report"
        );

        Ok(Report {
            query: query.to_string(),
            summary: generate_summary(&key_points, query),
            topics: organize_by_topic(&key_points, query, &self.config.topic_labels),
            conclusions: self.conclusions.conclude(&key_points, query),
            sources,
            search_results: Vec::new(),
            query_intent: None,
        })
    }
}

impl Default for ReportSynthesizer {
    fn default() -> Self {
        Self::new(Arc::new(AnalysisConfig::default()))
    }
}
