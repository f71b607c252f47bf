//! Conversation stage tool.

use std::str::FromStr;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::{SessionState, Stage};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// `set_stage`: advance the conversation to a named phase.
///
/// Unrecognized stage names are rejected: the state stays untouched and the
/// model gets a descriptive string back instead of a snapshot.
pub struct SetStage {
    parameters: ToolParameters,
}

impl SetStage {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string_enum(
                    "stage",
                    "The phase to move the conversation to",
                    &["onboarding", "enrichment", "trinity"],
                    true,
                )
                .build(),
        }
    }
}

impl Default for SetStage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SetStage {
    fn name(&self) -> &str {
        "set_stage"
    }

    fn description(&self) -> &str {
        "Move the conversation to a new stage: onboarding, enrichment, or trinity."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        session: &mut SessionState,
        _gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let raw = args.get_str("stage")?;
        match Stage::from_str(raw) {
            Ok(stage) => {
                session.set_stage(stage);
                Ok(ToolOutcome::state_changed(session))
            }
            Err(_) => {
                warn!(stage = raw, "rejected unknown stage");
                Ok(ToolOutcome::text(format!(
                    "Unknown stage '{raw}'. Expected onboarding, enrichment, or trinity."
                )))
            }
        }
    }
}
