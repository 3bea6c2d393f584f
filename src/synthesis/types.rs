// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report types

use serde::{Deserialize, Serialize};

use crate::intent::QueryIntent;
use crate::search::SearchResult;

/// A key point tagged with the page it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub text: String,
    pub source_title: String,
    pub source_url: String,
}

/// A named bucket of key points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub points: Vec<KeyPoint>,
}

/// A source that survived the relevance floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub title: String,
    pub url: String,
    pub relevance: f64,
    pub reliability: f64,
}

/// Final research report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub query: String,
    pub summary: String,
    pub topics: Vec<Topic>,
    pub conclusions: Vec<String>,
    pub sources: Vec<SourceSummary>,
    #[serde(default)]
    pub search_results: Vec<SearchResult>,
    #[serde(default)]
    pub query_intent: Option<QueryIntent>,
}
