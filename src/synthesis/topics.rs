// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword topic bucketing

use super::types::{KeyPoint, Topic};
use crate::text::{capitalize, query_terms};

/// Bucket for points that match no candidate topic
const DEFAULT_TOPIC: &str = "Overview";

/// Query terms must be longer than this (in characters) to become topics
const MIN_TOPIC_TERM_CHARS: usize = 3;

/// Group key points under topic names
///
/// Candidates are the query terms longer than three characters followed by
/// `topic_labels`. Each point joins the first candidate found (as a
/// case-insensitive substring) in its text, or "Overview" if none is. Topics
/// appear in the order they were first used.
pub fn organize_by_topic(
    key_points: &[KeyPoint],
    query: &str,
    topic_labels: &[String],
) -> Vec<Topic> {
    let candidates: Vec<String> = query_terms(query)
        .into_iter()
        .filter(|term| term.chars().count() > MIN_TOPIC_TERM_CHARS)
        .chain(topic_labels.iter().map(|t| t.to_lowercase()))
        .collect();

    let mut topics: Vec<Topic> = Vec::new();

    for point in key_points {
        let text = point.text.to_lowercase();
        let label = candidates
            .iter()
            .find(|candidate| text.contains(candidate.as_str()))
            .map(|candidate| capitalize(candidate))
            .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

        match topics.iter_mut().find(|topic| topic.name == label) {
            Some(topic) => topic.points.push(point.clone()),
            None => topics.push(Topic {
                name: label,
                points: vec![point.clone()],
            }),
        }
    }

    topics
}
