// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod agent;
pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod intent;
pub mod search;
pub mod synthesis;
pub mod text;

pub use agent::{ResearchAgent, ResearchOutcome};
pub use config::ResearchConfig;
pub use error::{ConfigError, ResearchError};
