//! Gateway to the hosted conversation-memory service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{QuestlineError, Result};

/// Session-scoped message memory.
///
/// `None` from the read operations means the service has never seen the
/// session. That is a normal condition, not a failure.
#[async_trait]
pub trait MemoryService: Send + Sync {
    /// Store one message under the session.
    async fn add(&self, session_id: &str, role: &str, content: &str) -> Result<()>;

    /// Fetch the synthesized context for the session.
    async fn get(&self, session_id: &str) -> Result<Option<String>>;

    /// Rank stored messages against a query.
    async fn search(&self, session_id: &str, query: &str, limit: usize)
        -> Result<Option<Vec<String>>>;
}

/// HTTP client for the hosted memory API.
#[derive(Debug, Clone)]
pub struct MemoryClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct AddMessagesBody<'a> {
    messages: Vec<MessageBody<'a>>,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    role_type: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    text: &'a str,
    limit: usize,
}

#[derive(Deserialize)]
struct MemoryEnvelope {
    context: Option<String>,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    message: Option<HitMessage>,
}

#[derive(Deserialize)]
struct HitMessage {
    content: String,
}

impl MemoryClient {
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
impl MemoryService for MemoryClient {
    async fn add(&self, session_id: &str, role: &str, content: &str) -> Result<()> {
        let body = AddMessagesBody {
            messages: vec![MessageBody {
                role_type: role,
                content,
            }],
        };
        let response = self
            .http
            .post(self.url(&format!("/sessions/{session_id}/memory")))
            .header("authorization", format!("Api-Key {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuestlineError::api(status.as_u16(), message));
        }

        debug!(session_id, "stored message in memory service");
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(self.url(&format!("/sessions/{session_id}/memory")))
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

        let envelope: MemoryEnvelope = response.json().await?;
        Ok(envelope.context.filter(|c| !c.is_empty()))
    }

    async fn search(
        &self,
        session_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Option<Vec<String>>> {
        let response = self
            .http
            .post(self.url(&format!("/sessions/{session_id}/search")))
            .header("authorization", format!("Api-Key {}", self.api_key))
            .json(&SearchBody { text: query, limit })
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

        let envelope: SearchEnvelope = response.json().await?;
        let hits: Vec<String> = envelope
            .results
            .into_iter()
            .filter_map(|hit| hit.message.map(|m| m.content))
            .collect();
        debug!(session_id, query, hits = hits.len(), "memory search");
        if hits.is_empty() {
            Ok(None)
        } else {
            Ok(Some(hits))
        }
    }
}
