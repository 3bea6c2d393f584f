// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content analysis
//!
//! Deterministic heuristics scoring fetched pages against a research query:
//! term-frequency relevance, key-sentence extraction, a metadata-based
//! reliability proxy, word-list sentiment and a placeholder entity extractor.

pub mod analyzer;
pub mod config;
pub mod entities;
pub mod relevance;
pub mod reliability;
pub mod sentiment;
pub mod types;

pub use analyzer::ContentAnalyzer;
pub use config::AnalysisConfig;
pub use entities::{EntityExtractor, StaticEntityExtractor};
pub use relevance::{extract_key_points, score_relevance};
pub use reliability::assess_reliability;
pub use sentiment::classify_sentiment;
pub use types::{Analysis, Entity, EntityKind, Sentiment, SourceRef};
