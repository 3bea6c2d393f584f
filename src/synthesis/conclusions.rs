// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Conclusion generation
//!
//! [`TemplateConclusions`] is a placeholder: its output depends only on the
//! query and on whether any key points were found, never on their content.

use super::types::KeyPoint;

/// Produces the conclusion list of a report
pub trait ConclusionGenerator: Send + Sync {
    fn conclude(&self, key_points: &[KeyPoint], query: &str) -> Vec<String>;
}

/// Fixed template conclusions
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateConclusions;

impl ConclusionGenerator for TemplateConclusions {
    fn conclude(&self, key_points: &[KeyPoint], query: &str) -> Vec<String> {
        if key_points.is_empty() {
            return vec!["Insufficient information available to draw conclusions.".to_string()];
        }

        vec![
            format!(
                "Research on '{}' reveals multiple perspectives and insights.",
                query
            ),
            "The information gathered shows both consensus and diverging viewpoints on this topic."
                .to_string(),
            "Further research may be needed to fully address all aspects of this query."
                .to_string(),
        ]
    }
}
