// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Source reliability heuristic
//!
//! A trust proxy built from metadata presence and a domain allow-list. It says
//! nothing about the factual accuracy of a page.

use crate::fetch::PageMetadata;

const BASELINE: f64 = 0.5;
const KNOWN_DOMAIN_BONUS: f64 = 0.3;
const AUTHOR_BONUS: f64 = 0.1;
const PUBLISHED_DATE_BONUS: f64 = 0.1;

/// Score the reliability of a source in [0, 1]
///
/// Missing metadata returns the 0.5 baseline. The domain bonus applies once,
/// when the URL or the lowercased site name contains an allow-listed domain.
pub fn assess_reliability(
    metadata: Option<&PageMetadata>,
    url: &str,
    reliable_domains: &[String],
) -> f64 {
    let Some(metadata) = metadata else {
        return BASELINE;
    };

    let mut score = BASELINE;

    let site_name = metadata
        .site_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if reliable_domains
        .iter()
        .any(|domain| url.contains(domain.as_str()) || site_name.contains(domain.as_str()))
    {
        score += KNOWN_DOMAIN_BONUS;
    }

    if is_present(&metadata.author) {
        score += AUTHOR_BONUS;
    }
    if is_present(&metadata.published_date) {
        score += PUBLISHED_DATE_BONUS;
    }

    score.min(1.0)
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |v| !v.is_empty())
}
