// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for the research pipeline

use thiserror::Error;

/// Errors that end a research request
///
/// The `Display` text of each variant is the message returned to callers in
/// `ResearchOutcome::error`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResearchError {
    #[error("No search results found")]
    EmptySearchResults,

    /// Per-URL fetch failure; logged and skipped, never ends a request on its own
    #[error("Failed to fetch {url}: {message}")]
    FetchFailure { url: String, message: String },

    #[error("Failed to scrape content from search results")]
    NoAnalyzableContent,

    #[error("No content to synthesize")]
    SynthesisInputEmpty,

    #[error("Error processing query: {0}")]
    Internal(String),
}

impl ResearchError {
    /// Whether the failure is a fault in the service rather than in the request
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {section} configuration: {message}")]
    Invalid { section: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ResearchError::EmptySearchResults.to_string(),
            "No search results found"
        );
        assert_eq!(
            ResearchError::NoAnalyzableContent.to_string(),
            "Failed to scrape content from search results"
        );
        assert_eq!(
            ResearchError::SynthesisInputEmpty.to_string(),
            "No content to synthesize"
        );
        assert_eq!(
            ResearchError::Internal("boom".to_string()).to_string(),
            "Error processing query: boom"
        );
    }

    #[test]
    fn test_is_internal() {
        assert!(ResearchError::Internal("x".to_string()).is_internal());
        assert!(!ResearchError::EmptySearchResults.is_internal());
    }
}
