// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-page analysis records

use serde::{Deserialize, Serialize};

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Kind of a named entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Organization,
    Person,
    Location,
}

/// A named entity mention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

/// Provenance of an analysis: the page it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub url: String,
    pub title: Option<String>,
}

/// Analysis of one fetched page against a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub source: SourceRef,
    /// False when the page could not be analyzed
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// In [0, 1]
    pub relevance_score: f64,
    /// In [0, 1]
    pub reliability_score: f64,
    pub key_points: Vec<String>,
    pub sentiment: Sentiment,
    pub entities: Vec<Entity>,
}

impl Analysis {
    /// Analysis for a page that could not be analyzed
    pub fn failed(source: SourceRef, error: impl Into<String>) -> Self {
        Self {
            source,
            success: false,
            error: Some(error.into()),
            relevance_score: 0.0,
            reliability_score: 0.0,
            key_points: Vec::new(),
            sentiment: Sentiment::Neutral,
            entities: Vec::new(),
        }
    }
}
