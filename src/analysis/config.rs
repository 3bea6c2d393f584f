// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Word lists, domain allow-list and topic labels used by analysis and synthesis

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_RELIABLE_DOMAINS: [&str; 10] = [
    "wikipedia.org",
    "nytimes.com",
    "bbc.com",
    "reuters.com",
    "nature.com",
    "science.org",
    "scientificamerican.com",
    "economist.com",
    "washingtonpost.com",
    "theguardian.com",
];

const DEFAULT_POSITIVE_WORDS: [&str; 10] = [
    "good",
    "great",
    "excellent",
    "positive",
    "beneficial",
    "advantage",
    "success",
    "improve",
    "better",
    "best",
];

const DEFAULT_NEGATIVE_WORDS: [&str; 10] = [
    "bad", "poor", "negative", "problem", "issue", "concern", "risk", "fail", "worse", "worst",
];

const DEFAULT_TOPIC_LABELS: [&str; 5] = ["overview", "background", "analysis", "impact", "future"];

/// Fixed lists consumed by the analyzer and synthesizer; loaded once and shared immutably
///
/// Every list is matched against lowercased text, so entries are stored
/// trimmed and lowercased (see [`AnalysisConfig::normalize`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Domains that earn the reliability bonus
    pub reliable_domains: Vec<String>,
    /// Words counted as positive by the sentiment classifier
    pub positive_words: Vec<String>,
    /// Words counted as negative by the sentiment classifier
    pub negative_words: Vec<String>,
    /// Generic topic labels tried, in order, after the query-derived topics
    pub topic_labels: Vec<String>,
}

impl AnalysisConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override lists from comma-separated environment variables
    pub fn apply_env(&mut self) {
        if let Some(list) = env_list("RELIABLE_DOMAINS") {
            self.reliable_domains = list;
        }
        if let Some(list) = env_list("POSITIVE_WORDS") {
            self.positive_words = list;
        }
        if let Some(list) = env_list("NEGATIVE_WORDS") {
            self.negative_words = list;
        }
        if let Some(list) = env_list("TOPIC_LABELS") {
            self.topic_labels = list;
        }
    }

    /// Trim and lowercase every list entry
    pub fn normalize(&mut self) {
        for list in [
            &mut self.reliable_domains,
            &mut self.positive_words,
            &mut self.negative_words,
            &mut self.topic_labels,
        ] {
            for item in list.iter_mut() {
                *item = item.trim().to_lowercase();
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.positive_words.iter().chain(&self.negative_words).any(|w| w.trim().is_empty()) {
            return Err("sentiment word lists cannot contain empty words".to_string());
        }
        if self.reliable_domains.iter().any(|d| d.trim().is_empty()) {
            return Err("reliable_domains cannot contain empty domains".to_string());
        }
        if self.topic_labels.iter().any(|t| t.trim().is_empty()) {
            return Err("topic_labels cannot contain empty labels".to_string());
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reliable_domains: to_owned(&DEFAULT_RELIABLE_DOMAINS),
            positive_words: to_owned(&DEFAULT_POSITIVE_WORDS),
            negative_words: to_owned(&DEFAULT_NEGATIVE_WORDS),
            topic_labels: to_owned(&DEFAULT_TOPIC_LABELS),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Parse a comma-separated, lowercased list; `None` if unset or empty
fn parse_list(raw: &str) -> Option<Vec<String>> {
    let list: Vec<String> = raw
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    (!list.is_empty()).then_some(list)
}

fn env_list(key: &str) -> Option<Vec<String>> {
    env::var(key).ok().as_deref().and_then(parse_list)
}
