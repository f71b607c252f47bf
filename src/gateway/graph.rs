//! Gateway to the hosted knowledge-graph service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{QuestlineError, Result};

/// A structured fact attached to a user's graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphFact {
    /// Fact category, e.g. `"skill"`, `"role_history"`, `"preference"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form structured payload.
    pub data: serde_json::Value,
}

/// User-level knowledge graph.
///
/// Reads return `None` for users the service has never seen.
#[async_trait]
pub trait GraphService: Send + Sync {
    /// Attach a structured fact to the user's graph.
    async fn add_fact(&self, user_id: &str, fact: &GraphFact) -> Result<()>;

    /// Search the user's graph edges against a query.
    async fn search(&self, user_id: &str, query: &str, limit: usize)
        -> Result<Option<Vec<String>>>;

    /// Fetch everything known about the user.
    async fn get_user(&self, user_id: &str) -> Result<Option<Vec<String>>>;
}

/// HTTP client for the hosted graph API.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct AddFactBody<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    fact: &'a GraphFact,
}

#[derive(Serialize)]
struct GraphSearchBody<'a> {
    user_id: &'a str,
    query: &'a str,
    limit: usize,
}

#[derive(Deserialize)]
struct EdgesEnvelope {
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct Edge {
    fact: String,
}

#[derive(Deserialize)]
struct FactsEnvelope {
    #[serde(default)]
    facts: Vec<String>,
}

impl GraphClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl GraphService for GraphClient {
    async fn add_fact(&self, user_id: &str, fact: &GraphFact) -> Result<()> {
        let response = self
            .http
            .post(self.url("/graph"))
            .header("authorization", format!("Api-Key {}", self.api_key))
            .json(&AddFactBody { user_id, fact })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuestlineError::api(status.as_u16(), message));
        }

        debug!(user_id, kind = %fact.kind, "added fact to graph");
        Ok(())
    }

    async fn search(
        &self,
        user_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Option<Vec<String>>> {
        let response = self
            .http
            .post(self.url("/graph/search"))
            .header("authorization", format!("Api-Key {}", self.api_key))
            .json(&GraphSearchBody {
                user_id,
                query,
                limit,
            })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuestlineError::api(status.as_u16(), message));
        }

        let envelope: EdgesEnvelope = response.json().await?;
        let facts: Vec<String> = envelope.edges.into_iter().map(|e| e.fact).collect();
        debug!(user_id, query, hits = facts.len(), "graph search");
        if facts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(facts))
        }
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<Vec<String>>> {
        let response = self
            .http
            .get(self.url(&format!("/graph/users/{user_id}")))
            .header("authorization", format!("Api-Key {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuestlineError::api(status.as_u16(), message));
        }

        let envelope: FactsEnvelope = response.json().await?;
        if envelope.facts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(envelope.facts))
        }
    }
}
