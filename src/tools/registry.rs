//! Tool registry and dispatch.

use std::sync::Arc;

use tracing::debug;

use super::arguments::ToolArguments;
use super::tool::Tool;
use super::types::{ToolDescriptor, ToolOutcome};
use super::validation::validate_arguments;
use crate::error::{QuestlineError, Result};
use crate::events::{state_snapshot, SessionEvent};
use crate::gateway::Gateways;
use crate::state::SessionState;

/// Outcome of one dispatched tool call.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    /// What the tool returned to the model.
    pub outcome: ToolOutcome,
    /// Snapshot event for the runtime's observers, present exactly when the
    /// call advanced the session state revision.
    pub event: Option<SessionEvent>,
}

/// Fixed set of named tools, dispatched by the driving runtime.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in tool.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        for tool in super::builtin::all_tools() {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool. Registration order is preserved in listings.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Registered tool names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Typed signatures for the LLM runtime's tool listing.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| ToolDescriptor {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters().clone(),
            })
            .collect()
    }

    /// Dispatch one tool call against the live session.
    ///
    /// Arguments are validated against the tool's declared schema before
    /// execution. A snapshot event is attached whenever the call advanced the
    /// state revision, so observers stay synchronized without inspecting
    /// outcome shapes.
    pub async fn dispatch(
        &self,
        name: &str,
        args: serde_json::Value,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<DispatchResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| QuestlineError::UnknownTool(name.to_string()))?;

        validate_arguments(&args, &tool.parameters().schema)
            .map_err(|message| QuestlineError::InvalidArgument(format!("{name}: {message}")))?;

        let revision_before = session.revision;
        let arguments = ToolArguments::new(args);
        let outcome = tool.execute(&arguments, session, gateways).await?;

        let mutated = session.revision != revision_before;
        debug!(tool = name, mutated, revision = session.revision, "dispatched tool");

        let event = mutated.then(|| state_snapshot(session));
        Ok(DispatchResult { outcome, event })
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
