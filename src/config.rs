// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables (`.env` is read first when present). Missing TOML keys keep
//! their defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::debug;

use crate::analysis::AnalysisConfig;
use crate::error::ConfigError;
use crate::fetch::FetchConfig;
use crate::search::SearchConfig;

/// Orchestrator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Politeness delay between successive page fetches
    pub fetch_delay_ms: u64,
}

impl AgentConfig {
    pub fn apply_env(&mut self) {
        if let Some(delay) = env::var("FETCH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.fetch_delay_ms = delay;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_delay_ms > 60_000 {
            return Err("fetch_delay_ms cannot exceed 60000".to_string());
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 1000,
        }
    }
}

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn apply_env(&mut self) {
        if let Ok(host) = env::var("API_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = env::var("API_PORT").ok().and_then(|v| v.parse().ok()) {
            self.port = port;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }
        Ok(())
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Complete configuration of the research service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub analysis: AnalysisConfig,
    pub agent: AgentConfig,
    pub api: ApiConfig,
}

impl ResearchConfig {
    /// Parse configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse TOML, normalizing the analysis lists
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.analysis.normalize();
        Ok(config)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override every section from environment variables
    pub fn apply_env(&mut self) {
        self.search.apply_env();
        self.fetch.apply_env();
        self.analysis.apply_env();
        self.agent.apply_env();
        self.api.apply_env();
    }

    /// Load `.env`, the optional TOML file and environment overrides, then validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section: &'static str| {
            move |message: String| ConfigError::Invalid { section, message }
        };

        self.search.validate().map_err(invalid("search"))?;
        self.fetch.validate().map_err(invalid("fetch"))?;
        self.analysis.validate().map_err(invalid("analysis"))?;
        self.agent.validate().map_err(invalid("agent"))?;
        self.api.validate().map_err(invalid("api"))?;
        Ok(())
    }
}
