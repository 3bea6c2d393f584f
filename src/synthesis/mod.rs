// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report synthesis
//!
//! Turns relevance-ordered analyses into a structured report: a source list,
//! a pooled set of key points bucketed into topics, a summary paragraph and
//! template conclusions.

pub mod conclusions;
pub mod summary;
pub mod synthesizer;
pub mod topics;
pub mod types;

pub use conclusions::{ConclusionGenerator, TemplateConclusions};
pub use summary::generate_summary;
pub use synthesizer::{ReportSynthesizer, RELEVANCE_FLOOR};
pub use topics::organize_by_topic;
pub use types::{KeyPoint, Report, SourceSummary, Topic};
