// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query intent classification
//!
//! Pure substring checks over the lowercased query. Category checks run in a
//! fixed order and the first match wins, so "latest history guide" is
//! instructional.

use serde::{Deserialize, Serialize};

/// Broad category of a research query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Instructional,
    Comparative,
    News,
    Historical,
    Informational,
}

/// Kinds of information the query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationNeeds {
    pub facts: bool,
    pub opinions: bool,
    pub recent: bool,
    pub historical: bool,
}

/// Intent record attached to every successful report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub query_type: QueryType,
    pub information_needs: InformationNeeds,
}

const CATEGORY_RULES: [(QueryType, &[&str]); 4] = [
    (
        QueryType::Instructional,
        &["how to", "steps", "guide", "tutorial"],
    ),
    (
        QueryType::Comparative,
        &["compare", "difference", "versus", "vs"],
    ),
    (QueryType::News, &["news", "recent", "latest", "update"]),
    (QueryType::Historical, &["history", "origin", "background"]),
];

const OPINION_TERMS: [&str; 2] = ["opinion", "review"];
const RECENT_TERMS: [&str; 4] = ["recent", "latest", "new", "current"];
const HISTORICAL_TERMS: [&str; 4] = ["history", "origin", "background", "evolution"];

/// Classify the intent of a research query
pub fn classify_intent(query: &str) -> QueryIntent {
    let lower = query.to_lowercase();

    let query_type = CATEGORY_RULES
        .iter()
        .find(|(_, terms)| contains_any(&lower, terms))
        .map(|(query_type, _)| *query_type)
        .unwrap_or(QueryType::Informational);

    QueryIntent {
        query_type,
        information_needs: InformationNeeds {
            facts: true,
            opinions: contains_any(&lower, &OPINION_TERMS),
            recent: contains_any(&lower, &RECENT_TERMS),
            historical: contains_any(&lower, &HISTORICAL_TERMS),
        },
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
