//! Memory-service tools.
//!
//! Gateway failures are absorbed here: every path resolves to a descriptive
//! string so a flaky memory service can never abort the conversation turn.

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::SessionState;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

const DEFAULT_SEARCH_LIMIT: usize = 5;
const PREVIEW_BYTES: usize = 50;

fn preview(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut cutoff = max_bytes;
    while cutoff > 0 && !s.is_char_boundary(cutoff) {
        cutoff -= 1;
    }
    &s[..cutoff]
}

/// `save_to_memory`: store one message under the session.
pub struct SaveToMemory {
    parameters: ToolParameters,
}

impl SaveToMemory {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("session_id", "The conversation session id", true)
                .string("content", "What to remember", true)
                .string("role", "Message role, defaults to \"user\"", false)
                .build(),
        }
    }
}

impl Default for SaveToMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SaveToMemory {
    fn name(&self) -> &str {
        "save_to_memory"
    }

    fn description(&self) -> &str {
        "Save a message to long-term memory for this session. Use this to \
         remember important information about the user."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let session_id = args.get_str("session_id")?;
        let content = args.get_str("content")?;
        let role = args.get_str_opt("role").unwrap_or("user");

        match gateways.memory.add(session_id, role, content).await {
            Ok(()) => Ok(ToolOutcome::text(format!(
                "Saved to memory: {}...",
                preview(content, PREVIEW_BYTES)
            ))),
            Err(e) => {
                warn!(session_id, error = %e, "memory add failed");
                Ok(ToolOutcome::text(format!("Error saving to memory: {e}")))
            }
        }
    }
}

/// `get_memory`: recall the session's synthesized context.
pub struct GetMemory {
    parameters: ToolParameters,
}

impl GetMemory {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("session_id", "The conversation session id", true)
                .build(),
        }
    }
}

impl Default for GetMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetMemory {
    fn name(&self) -> &str {
        "get_memory"
    }

    fn description(&self) -> &str {
        "Retrieve the memory context for this session. Use this to recall \
         what you know about the user."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let session_id = args.get_str("session_id")?;

        match gateways.memory.get(session_id).await {
            Ok(Some(context)) => Ok(ToolOutcome::text(context)),
            Ok(None) => Ok(ToolOutcome::text("No memory found for this session.")),
            Err(e) => {
                warn!(session_id, error = %e, "memory get failed");
                Ok(ToolOutcome::text(format!(
                    "No memory found (session may be new): {e}"
                )))
            }
        }
    }
}

/// `search_memory`: rank stored messages against a query.
pub struct SearchMemory {
    parameters: ToolParameters,
}

impl SearchMemory {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("session_id", "The conversation session id", true)
                .string("query", "What to look for", true)
                .integer("limit", "Maximum results, defaults to 5", false)
                .build(),
        }
    }
}

impl Default for SearchMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchMemory {
    fn name(&self) -> &str {
        "search_memory"
    }

    fn description(&self) -> &str {
        "Search long-term memory for information relevant to a query."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let session_id = args.get_str("session_id")?;
        let query = args.get_str("query")?;
        let limit = args.get_usize_or("limit", DEFAULT_SEARCH_LIMIT)?;

        match gateways.memory.search(session_id, query, limit).await {
            Ok(Some(hits)) if !hits.is_empty() => Ok(ToolOutcome::text(hits.join("\n"))),
            Ok(_) => Ok(ToolOutcome::text("No relevant memories found.")),
            Err(e) => {
                warn!(session_id, query, error = %e, "memory search failed");
                Ok(ToolOutcome::text(format!("Error searching memory: {e}")))
            }
        }
    }
}
