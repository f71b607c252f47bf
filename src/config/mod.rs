//! Configuration loaded from the environment at host startup.
//!
//! The host process builds one [`QuestlineConfig`] and hands it to
//! [`crate::gateway::Gateways::connect`]. Nothing in this crate keeps a
//! process-global handle; gateways are explicitly constructed and injected.

use crate::error::{QuestlineError, Result};

/// Credentials and endpoint for one hosted service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Configuration for all external collaborators.
#[derive(Debug, Clone)]
pub struct QuestlineConfig {
    pub memory: ServiceConfig,
    pub graph: ServiceConfig,
    pub database_url: String,
}

const DEFAULT_MEMORY_BASE_URL: &str = "https://api.memory.questline.dev/v1";
const DEFAULT_GRAPH_BASE_URL: &str = "https://api.graph.questline.dev/v1";

impl QuestlineConfig {
    /// Load from environment variables (`MEMORY_API_KEY`, `GRAPH_API_KEY`,
    /// `DATABASE_URL`, plus optional `*_BASE_URL` overrides).
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let memory = ServiceConfig {
            api_key: require_var("MEMORY_API_KEY")?,
            base_url: std::env::var("MEMORY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MEMORY_BASE_URL.to_string()),
        };
        let graph = ServiceConfig {
            api_key: require_var("GRAPH_API_KEY")?,
            base_url: std::env::var("GRAPH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPH_BASE_URL.to_string()),
        };

        Ok(Self {
            memory,
            graph,
            database_url: require_var("DATABASE_URL")?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| QuestlineError::Configuration(format!("missing environment variable {name}")))
}
