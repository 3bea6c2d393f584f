// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::agent::ResearchAgent;
use crate::api::{start_server, AppState};
use crate::config::ResearchConfig;

/// Web Research Agent
#[derive(Parser, Debug)]
#[command(name = "web-research-agent")]
#[command(version)]
#[command(about = "Search, read and summarize the web for a research query", long_about = None)]
pub struct Cli {
    /// TOML configuration file; environment variables override its values
    #[arg(short, long, global = true, env = "RESEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve,

    /// Research a single query and print the outcome as JSON
    Query {
        /// The research query
        text: String,
    },
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config =
        ResearchConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if !config.search.has_any_provider() {
        info!("No SERPAPI_KEY configured; search results will be placeholder data");
    }

    let agent = Arc::new(ResearchAgent::from_config(&config));

    match cli.command {
        Commands::Serve => start_server(&config.api, AppState::new(agent)).await,
        Commands::Query { text } => {
            let outcome = agent.process_query(&text).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
    }
}
