// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML content extraction
//!
//! Turns a raw HTML document into [`PageContent`], [`PageMetadata`] and JSON-LD
//! blocks using CSS selectors. Text inside `<script>`, `<style>` and
//! `<noscript>` is never treated as visible text.

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use super::types::{FetchedPage, Heading, Image, Link, PageContent, PageMetadata};
use crate::text::truncate_with_marker;

const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Parse an HTML document fetched from `url` into a [`FetchedPage`]
pub fn parse_page(html: &str, url: &str, max_content_length: usize) -> FetchedPage {
    let document = Html::parse_document(html);

    FetchedPage {
        url: url.to_string(),
        content: extract_content(&document, max_content_length),
        metadata: extract_metadata(&document, url),
        structured_data: extract_structured_data(&document),
    }
}

/// Extract metadata from `<title>` and `<meta>` tags
///
/// Later meta tags win over earlier ones. The site name falls back to the URL
/// host when no `og:site_name` is present.
pub fn extract_metadata(document: &Html, url: &str) -> PageMetadata {
    let mut metadata = PageMetadata {
        url: Some(url.to_string()),
        ..Default::default()
    };

    metadata.title = select_all(document, "title")
        .first()
        .map(|el| visible_text(*el).trim().to_string());

    for tag in select_all(document, "meta") {
        let name = tag.value().attr("name");
        let property = tag.value().attr("property");
        let content = tag
            .value()
            .attr("content")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        if name == Some("description") || property == Some("og:description") {
            metadata.description = content;
        } else if name == Some("keywords") {
            metadata.keywords = content;
        } else if name == Some("author") {
            metadata.author = content;
        } else if name == Some("article:published_time")
            || property == Some("article:published_time")
        {
            metadata.published_date = content;
        } else if property == Some("og:site_name") {
            metadata.site_name = content;
        }
    }

    if metadata.site_name.is_none() {
        metadata.site_name = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
    }

    metadata
}

/// Extract headings, paragraphs, links, images and the main text
pub fn extract_content(document: &Html, max_content_length: usize) -> PageContent {
    let headings = (1..=6u8)
        .flat_map(|level| {
            select_all(document, &format!("h{}", level))
                .into_iter()
                .map(move |el| Heading {
                    level,
                    text: visible_text(el).trim().to_string(),
                })
        })
        .collect();

    let paragraphs: Vec<String> = select_all(document, "p")
        .into_iter()
        .map(|el| visible_text(el).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    let links = select_all(document, "a[href]")
        .into_iter()
        .filter_map(|el| {
            let text = visible_text(el).trim().to_string();
            let href = el.value().attr("href")?;
            (!text.is_empty()).then(|| Link {
                text,
                href: href.to_string(),
            })
        })
        .collect();

    let images = select_all(document, "img[alt]")
        .into_iter()
        .filter_map(|el| {
            let src = el.value().attr("src").filter(|s| !s.is_empty())?;
            let alt = el.value().attr("alt")?;
            Some(Image {
                src: src.to_string(),
                alt: alt.to_string(),
            })
        })
        .collect();

    let mut main_text = paragraphs.join("\n\n");

    // Prefer the article body when it carries more text than the paragraphs
    if let Some(article) = select_all(document, "article").first() {
        let article_text = visible_text(*article).trim().to_string();
        if article_text.chars().count() > main_text.chars().count() {
            main_text = article_text;
        }
    }

    if main_text.is_empty() {
        main_text = visible_text(document.root_element()).trim().to_string();
    }

    PageContent {
        main_text: truncate_with_marker(&main_text, max_content_length),
        headings,
        paragraphs,
        links,
        images,
    }
}

/// Extract every JSON-LD block that parses as JSON
pub fn extract_structured_data(document: &Html) -> Vec<serde_json::Value> {
    select_all(document, r#"script[type="application/ld+json"]"#)
        .into_iter()
        .filter_map(|el| {
            let raw: String = el.text().collect();
            serde_json::from_str(&raw).ok()
        })
        .collect()
}

fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Concatenated text of an element, skipping script/style content
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    matches!(ancestor.value(), Node::Element(e) if HIDDEN_ELEMENTS.contains(&e.name()))
                });
                (!hidden).then(|| &**text)
            }
            _ => None,
        })
        .collect()
}
