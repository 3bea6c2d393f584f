// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Normalized page records produced by the fetch layer

use serde::{Deserialize, Serialize};

/// A heading (`<h1>`..`<h6>`) in document order within its level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// An anchor with non-empty text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// An image carrying alt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Visible content of a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Main text, truncated with a "..." marker past the configured length
    pub main_text: String,
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
}

/// Page metadata; `None` means unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub site_name: Option<String>,
    pub url: Option<String>,
}

/// A successfully fetched and parsed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedPage {
    pub url: String,
    pub content: PageContent,
    pub metadata: PageMetadata,
    /// JSON-LD blocks found on the page
    pub structured_data: Vec<serde_json::Value>,
}

/// Outcome of fetching one URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchResult {
    Success(FetchedPage),
    Failure { url: String, error: String },
}

impl FetchResult {
    /// URL this result was fetched from
    pub fn url(&self) -> &str {
        match self {
            Self::Success(page) => &page.url,
            Self::Failure { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The fetched page, if the fetch succeeded
    pub fn page(&self) -> Option<&FetchedPage> {
        match self {
            Self::Success(page) => Some(page),
            Self::Failure { .. } => None,
        }
    }

    /// True when the fetch succeeded and produced non-empty main text
    pub fn has_text(&self) -> bool {
        self.page()
            .map(|p| !p.content.main_text.trim().is_empty())
            .unwrap_or(false)
    }
}
