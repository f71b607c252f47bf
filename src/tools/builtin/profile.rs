//! Profile and skill-list tools (session-only, no external calls).

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::{ProfilePatch, SessionState};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// `get_profile`: read the current profile, stage, and consents.
pub struct GetProfile {
    parameters: ToolParameters,
}

impl GetProfile {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::empty(),
        }
    }
}

impl Default for GetProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetProfile {
    fn name(&self) -> &str {
        "get_profile"
    }

    fn description(&self) -> &str {
        "Get the user's current profile, skills, stage, and consents. \
         Always check this before discussing or updating the profile."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        _args: &ToolArguments,
        session: &mut SessionState,
        _gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        debug!(user_id = %session.user_id, skills = session.profile.skills.len(), "reading profile");
        Ok(ToolOutcome::data(serde_json::json!({
            "profile": &session.profile,
            "stage": session.stage,
            "consents": &session.consents,
        })))
    }
}

/// `update_profile`: merge-write the scalar profile fields.
pub struct UpdateProfile {
    parameters: ToolParameters,
}

impl UpdateProfile {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("name", "The user's full name", false)
                .string("role", "Current or desired role", false)
                .string("company", "Current company", false)
                .string("location", "Where the user is based or wants to work", false)
                .string("day_rate", "Target day rate, e.g. \"£650\"", false)
                .string("availability", "When the user is available", false)
                .string("work_style", "Remote, hybrid, or on-site preference", false)
                .build(),
        }
    }
}

impl Default for UpdateProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for UpdateProfile {
    fn name(&self) -> &str {
        "update_profile"
    }

    fn description(&self) -> &str {
        "Update profile fields. Only pass fields the user actually stated; \
         omitted fields are left unchanged."
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
        let patch: ProfilePatch = args.deserialize()?;
        session.apply_profile_patch(&patch);
        Ok(ToolOutcome::state_changed(session))
    }
}

/// `add_skills`: append skills to the list.
pub struct AddSkills {
    parameters: ToolParameters,
}

impl AddSkills {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string_list("skills", "Skills to append to the user's list", true)
                .build(),
        }
    }
}

impl Default for AddSkills {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AddSkills {
    fn name(&self) -> &str {
        "add_skills"
    }

    fn description(&self) -> &str {
        "Append skills to the user's skill list, preserving the existing ones."
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
        let skills = args.get_string_list("skills")?;
        session.add_skills(skills);
        Ok(ToolOutcome::state_changed(session))
    }
}

/// `set_skills`: replace the entire skill list.
pub struct SetSkills {
    parameters: ToolParameters,
}

impl SetSkills {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string_list("skills", "The complete replacement skill list", true)
                .build(),
        }
    }
}

impl Default for SetSkills {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SetSkills {
    fn name(&self) -> &str {
        "set_skills"
    }

    fn description(&self) -> &str {
        "Replace the user's skill list entirely. Use only when the user asks \
         to rewrite the list; prefer add_skills otherwise."
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
        let skills = args.get_string_list("skills")?;
        session.set_skills(skills);
        Ok(ToolOutcome::state_changed(session))
    }
}
