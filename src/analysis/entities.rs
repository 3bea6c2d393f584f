// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Entity extraction seam
//!
//! No named-entity recognition is performed. [`StaticEntityExtractor`] is a
//! non-semantic placeholder that returns the same illustrative entities for
//! every text; swap in another [`EntityExtractor`] to change that.

use super::types::{Entity, EntityKind};

/// Extracts named entities from page text
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Entity>;
}

/// Placeholder extractor with fixed, input-independent output
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticEntityExtractor;

impl EntityExtractor for StaticEntityExtractor {
    fn extract(&self, _text: &str) -> Vec<Entity> {
        vec![
            Entity {
                text: "Example Organization".to_string(),
                kind: EntityKind::Organization,
            },
            Entity {
                text: "John Smith".to_string(),
                kind: EntityKind::Person,
            },
            Entity {
                text: "New York".to_string(),
                kind: EntityKind::Location,
            },
        ]
    }
}
