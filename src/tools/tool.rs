//! The core tool contract.

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::{ToolOutcome, ToolParameters};
use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::SessionState;

/// A named operation exposed to the driving LLM runtime.
///
/// Tools receive the live session state by mutable reference (the borrow
/// enforces the one-writer-per-session rule) plus the injected gateways.
/// External-call failures must be converted into descriptive string outcomes
/// inside `execute`; an `Err` from a tool signals a contract violation (bad
/// dispatch), not a degraded external service.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    /// Human-readable description surfaced to the model.
    fn description(&self) -> &str;

    /// JSON Schema parameter declaration.
    fn parameters(&self) -> &ToolParameters;

    /// Execute with validated arguments against the live session.
    async fn execute(
        &self,
        args: &ToolArguments,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome>;
}
