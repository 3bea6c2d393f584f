// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Term-frequency relevance scoring and key-point extraction
//!
//! Relevance counts whole-word matches while key-point scoring uses substring
//! containment, so "rust" in "rusty" raises a sentence's key-point score but
//! not the page's relevance.

use regex::Regex;

use crate::text::{query_terms, split_sentences};

/// Average occurrences per query term that saturate the relevance score
const SATURATION_OCCURRENCES: f64 = 3.0;
/// Maximum number of key points returned
pub const MAX_KEY_POINTS: usize = 5;
/// Sentences shorter than this (in characters) are never scored
const MIN_SENTENCE_CHARS: usize = 10;
/// Below this many scored sentences the positional backfill kicks in
const BACKFILL_THRESHOLD: usize = 3;
/// Backfill candidates must be longer than this (in characters)
const BACKFILL_MIN_CHARS: usize = 30;
/// Backfill scans sentences up to (not including) this index
const BACKFILL_SCAN_END: usize = 10;
const MULTI_TERM_BOOST: f64 = 1.5;

/// Score how relevant `text` is to `query`, in [0, 1]
///
/// `min(1, (total whole-word occurrences / number of terms) / 3)`, matched
/// case-insensitively. An empty query scores 0.
pub fn score_relevance(text: &str, query: &str) -> f64 {
    let terms = query_terms(query);
    if terms.is_empty() {
        return 0.0;
    }

    let text_lower = text.to_lowercase();
    let total: usize = terms
        .iter()
        .map(|term| count_whole_word(&text_lower, term))
        .sum();

    let average = total as f64 / terms.len() as f64;
    (average / SATURATION_OCCURRENCES).min(1.0)
}

fn count_whole_word(haystack: &str, term: &str) -> usize {
    match Regex::new(&format!(r"\b{}\b", regex::escape(term))) {
        Ok(re) => re.find_iter(haystack).count(),
        Err(_) => 0,
    }
}

/// Extract up to five sentences that best represent `text` for `query`
///
/// Sentences are scored by the number of distinct query terms they contain
/// (×1.5 when more than one matches) and stably sorted by score. Sparse pages
/// are backfilled with the first sentence and early sentences over 30
/// characters.
pub fn extract_key_points(text: &str, query: &str) -> Vec<String> {
    let sentences = split_sentences(text);

    let mut terms = query_terms(query);
    let mut seen = std::collections::HashSet::new();
    terms.retain(|t| seen.insert(t.clone()));

    let mut scored: Vec<(&str, f64)> = sentences
        .iter()
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(|s| (*s, score_sentence(s, &terms)))
        .collect();

    // Stable: equal scores keep document order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut points: Vec<String> = scored
        .into_iter()
        .take(MAX_KEY_POINTS)
        .filter(|(_, score)| *score > 0.0)
        .map(|(s, _)| s.to_string())
        .collect();

    if points.len() < BACKFILL_THRESHOLD && sentences.len() > BACKFILL_THRESHOLD {
        let first = sentences[0];
        if !points.iter().any(|p| p == first) {
            points.push(first.to_string());
        }

        for candidate in sentences
            .iter()
            .take(BACKFILL_SCAN_END.min(sentences.len()))
            .skip(1)
        {
            if points.len() >= MAX_KEY_POINTS {
                break;
            }
            if candidate.chars().count() > BACKFILL_MIN_CHARS
                && !points.iter().any(|p| p == candidate)
            {
                points.push(candidate.to_string());
            }
        }
    }

    points
}

fn score_sentence(sentence: &str, distinct_terms: &[String]) -> f64 {
    let lower = sentence.to_lowercase();
    let matches = distinct_terms
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .count() as f64;

    if matches > 1.0 {
        matches * MULTI_TERM_BOOST
    } else {
        matches
    }
}
