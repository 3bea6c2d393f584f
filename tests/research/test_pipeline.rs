// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end pipeline tests
//!
//! Runs the research agent against placeholder search results and an
//! in-memory fetcher that serves canned HTML through the real extractor.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use web_research_agent::{
    analysis::ContentAnalyzer,
    config::AgentConfig,
    fetch::{parse_page, FetchResult, PageFetcher},
    intent::QueryType,
    search::{NoFallback, PlaceholderFallback, SearchConfig, SearchService},
    synthesis::ReportSynthesizer,
    ResearchAgent, ResearchError,
};

const ENERGY_PAGE: &str = r#"
<html>
<head>
    <title>Renewable Energy Explained</title>
    <meta name="author" content="Jane Doe">
    <meta property="article:published_time" content="2024-01-01">
</head>
<body>
    <article>
        <h1>Renewable energy</h1>
        <p>Renewable energy comes from natural sources that are replenished.</p>
        <p>Solar and wind are renewable energy sources that keep growing.</p>
        <p>Storage improves how grids use renewable power.</p>
    </article>
    <script>var renewable = "ignored";</script>
</body>
</html>
"#;

const CAT_PAGE: &str = r#"
<html>
<head><title>Cats</title></head>
<body>
    <p>Cats sleep for most of the day.</p>
    <p>They are also very curious animals.</p>
</body>
</html>
"#;

/// Serves the same HTML for every URL and records the order of requests
struct HtmlFetcher {
    html: &'static str,
    calls: Mutex<Vec<String>>,
}

impl HtmlFetcher {
    fn new(html: &'static str) -> Arc<Self> {
        Arc::new(Self {
            html,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for HtmlFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.calls.lock().unwrap().push(url.to_string());
        FetchResult::Success(parse_page(self.html, url, 10_000))
    }
}

fn placeholder_search(num_results: usize) -> Arc<SearchService> {
    let config = SearchConfig {
        default_num_results: num_results,
        ..SearchConfig::default()
    };
    Arc::new(SearchService::with_providers(
        config,
        vec![],
        Box::new(PlaceholderFallback::default()),
    ))
}

fn agent(
    search: Arc<SearchService>,
    fetcher: Arc<HtmlFetcher>,
    fetch_delay_ms: u64,
) -> ResearchAgent {
    ResearchAgent::new(
        search,
        fetcher,
        ContentAnalyzer::default(),
        ReportSynthesizer::default(),
        AgentConfig { fetch_delay_ms },
    )
}

#[tokio::test]
async fn test_full_pipeline_produces_report() {
    let fetcher = HtmlFetcher::new(ENERGY_PAGE);
    let agent = agent(placeholder_search(3), fetcher.clone(), 0);

    let outcome = agent.process_query("renewable energy").await;
    assert!(outcome.success, "unexpected error: {:?}", outcome.error);

    let report = outcome.report.unwrap();
    assert_eq!(report.query, "renewable energy");
    assert!(report
        .summary
        .starts_with("Based on research about 'renewable energy', the following information was found."));
    assert_eq!(report.conclusions.len(), 3);
    assert_eq!(report.search_results.len(), 3);
    assert_eq!(report.sources.len(), 3);
    assert_eq!(report.topics[0].name, "Renewable");

    // Equal relevance keeps search order
    let source_urls: Vec<&str> = report.sources.iter().map(|s| s.url.as_str()).collect();
    let result_urls: Vec<&str> = report.search_results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(source_urls, result_urls);
    assert_eq!(
        source_urls[0],
        "https://www.wikipedia.org/articles/renewable-energy-1"
    );

    for source in &report.sources {
        assert_eq!(source.title, "Renewable Energy Explained");
        assert_eq!(source.reliability, 1.0);
        assert!(source.relevance >= 0.2 && source.relevance <= 1.0);
    }

    let intent = report.query_intent.unwrap();
    assert_eq!(intent.query_type, QueryType::Informational);
    assert!(intent.information_needs.facts);
}

#[tokio::test]
async fn test_script_text_never_reaches_key_points() {
    let fetcher = HtmlFetcher::new(ENERGY_PAGE);
    let agent = agent(placeholder_search(1), fetcher, 0);

    let report = agent.run("renewable").await.unwrap();
    for topic in &report.topics {
        for point in &topic.points {
            assert!(!point.text.contains("ignored"));
        }
    }
}

#[tokio::test]
async fn test_irrelevant_pages_degrade_report() {
    let fetcher = HtmlFetcher::new(CAT_PAGE);
    let agent = agent(placeholder_search(3), fetcher.clone(), 0);

    let outcome = agent.process_query("quantum computing").await;
    assert!(outcome.success);

    let report = outcome.report.unwrap();
    assert_eq!(
        report.summary,
        "No relevant information found for 'quantum computing'."
    );
    assert_eq!(
        report.conclusions,
        vec!["Insufficient information available to draw conclusions.".to_string()]
    );
    assert!(report.topics.is_empty());
    assert!(report.sources.is_empty());
    assert_eq!(report.search_results.len(), 3);
    assert_eq!(fetcher.calls().len(), 3);
}

#[tokio::test]
async fn test_zero_search_results_never_fetches() {
    let search = Arc::new(SearchService::with_providers(
        SearchConfig::default(),
        vec![],
        Box::new(NoFallback),
    ));
    let fetcher = HtmlFetcher::new(ENERGY_PAGE);
    let agent = agent(search, fetcher.clone(), 0);

    let outcome = agent.process_query("renewable energy").await;
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("No search results found"));
    assert!(outcome.report.is_none());
    assert!(fetcher.calls().is_empty());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["report"].is_null());
}

#[tokio::test]
async fn test_pages_without_text_are_not_analyzable() {
    let fetcher = HtmlFetcher::new("<html><head></head><body><div></div></body></html>");
    let agent = agent(placeholder_search(2), fetcher, 0);

    assert_eq!(
        agent.run("anything").await,
        Err(ResearchError::NoAnalyzableContent)
    );
}

#[tokio::test]
async fn test_fetches_are_sequential_and_paced() {
    let fetcher = HtmlFetcher::new(ENERGY_PAGE);
    let agent = agent(placeholder_search(3), fetcher.clone(), 30);

    let start = Instant::now();
    let report = agent.run("renewable energy").await.unwrap();
    let elapsed = start.elapsed();

    // Delay only between successive fetches
    assert!(elapsed.as_millis() >= 60, "elapsed {:?}", elapsed);

    let expected: Vec<String> = report.search_results.iter().map(|r| r.url.clone()).collect();
    assert_eq!(fetcher.calls(), expected);
}

#[tokio::test]
async fn test_intent_attached_to_report() {
    let fetcher = HtmlFetcher::new(ENERGY_PAGE);
    let agent = agent(placeholder_search(1), fetcher, 0);

    let report = agent.run("latest renewable energy news").await.unwrap();
    let intent = report.query_intent.unwrap();
    assert_eq!(intent.query_type, QueryType::News);
    assert!(intent.information_needs.recent);
}
