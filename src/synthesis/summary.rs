// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summary paragraph

use super::types::KeyPoint;

/// Number of key points quoted in the summary
pub const SUMMARY_POINTS: usize = 3;

/// Build the summary paragraph from the pooled key points
pub fn generate_summary(key_points: &[KeyPoint], query: &str) -> String {
    if key_points.is_empty() {
        return format!("No relevant information found for '{}'.", query);
    }

    let quoted = key_points
        .iter()
        .take(SUMMARY_POINTS)
        .map(|point| point.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Based on research about '{}', the following information was found. {}",
        query, quoted
    )
}
