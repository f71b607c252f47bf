//! Database-backed persistence tools.
//!
//! All of these short-circuit for the anonymous sentinel user before any
//! gateway call: an unauthenticated session keeps everything session-only.

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::{ProfilePatch, SessionState};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// Returned by every db tool when the session is anonymous.
pub const NOT_LOGGED_IN: &str = "Not logged in. Changes kept in session only.";

fn patch_from_session(session: &SessionState) -> ProfilePatch {
    ProfilePatch {
        name: session.profile.name.clone(),
        role: session.profile.role.clone(),
        company: session.profile.company.clone(),
        location: session.profile.location.clone(),
        day_rate: session.profile.day_rate.clone(),
        availability: session.profile.availability.clone(),
        work_style: session.profile.work_style.clone(),
    }
}

/// `save_profile_to_db`: upsert the session's profile fields.
pub struct SaveProfileToDb {
    parameters: ToolParameters,
}

impl SaveProfileToDb {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::empty(),
        }
    }
}

impl Default for SaveProfileToDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SaveProfileToDb {
    fn name(&self) -> &str {
        "save_profile_to_db"
    }

    fn description(&self) -> &str {
        "Persist the user's profile fields to their account. Only works when \
         the user is logged in."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        _args: &ToolArguments,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        if session.is_anonymous() {
            return Ok(ToolOutcome::text(NOT_LOGGED_IN));
        }

        let patch = patch_from_session(session);
        match gateways.store.upsert_profile(&session.user_id, &patch).await {
            Ok(()) => Ok(ToolOutcome::text("Profile saved.")),
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "profile upsert failed");
                Ok(ToolOutcome::text(format!("Error saving profile: {e}")))
            }
        }
    }
}

/// `add_skill_to_db`: append one skill row to the user's account.
pub struct AddSkillToDb {
    parameters: ToolParameters,
}

impl AddSkillToDb {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("skill", "The skill to record", true)
                .build(),
        }
    }
}

impl Default for AddSkillToDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AddSkillToDb {
    fn name(&self) -> &str {
        "add_skill_to_db"
    }

    fn description(&self) -> &str {
        "Record a skill on the user's account. Only works when logged in."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let skill = args.get_str("skill")?;
        if session.is_anonymous() {
            return Ok(ToolOutcome::text(NOT_LOGGED_IN));
        }

        match gateways.store.insert_skill(&session.user_id, skill).await {
            Ok(()) => Ok(ToolOutcome::text(format!("Recorded skill: {skill}"))),
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "skill insert failed");
                Ok(ToolOutcome::text(format!("Error saving skill: {e}")))
            }
        }
    }
}

/// `add_need_to_db`: append one need row to the user's account.
pub struct AddNeedToDb {
    parameters: ToolParameters,
}

impl AddNeedToDb {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("need", "What the user is looking for", true)
                .build(),
        }
    }
}

impl Default for AddNeedToDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AddNeedToDb {
    fn name(&self) -> &str {
        "add_need_to_db"
    }

    fn description(&self) -> &str {
        "Record something the user needs from their next engagement. Only \
         works when logged in."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let need = args.get_str("need")?;
        if session.is_anonymous() {
            return Ok(ToolOutcome::text(NOT_LOGGED_IN));
        }

        match gateways.store.insert_need(&session.user_id, need).await {
            Ok(()) => Ok(ToolOutcome::text(format!("Recorded need: {need}"))),
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "need insert failed");
                Ok(ToolOutcome::text(format!("Error saving need: {e}")))
            }
        }
    }
}

/// `load_profile_from_db`: merge the persisted record into the session.
///
/// Stored scalars follow the usual merge rule (a stored non-empty value
/// overwrites, an unset one leaves the session value alone); stored skills
/// are appended when the session list does not already contain them.
pub struct LoadProfileFromDb {
    parameters: ToolParameters,
}

impl LoadProfileFromDb {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::empty(),
        }
    }
}

impl Default for LoadProfileFromDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for LoadProfileFromDb {
    fn name(&self) -> &str {
        "load_profile_from_db"
    }

    fn description(&self) -> &str {
        "Load the user's saved profile from their account into this session."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        _args: &ToolArguments,
        session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        if session.is_anonymous() {
            return Ok(ToolOutcome::text(NOT_LOGGED_IN));
        }

        let stored = match gateways.store.load_profile(&session.user_id).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(ToolOutcome::text("No saved profile found.")),
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "profile load failed");
                return Ok(ToolOutcome::text(format!("Error loading profile: {e}")));
            }
        };

        let patch = ProfilePatch {
            name: stored.name,
            role: stored.role,
            company: None,
            location: stored.location,
            day_rate: stored.day_rate,
            availability: stored.availability,
            work_style: stored.work_style,
        };
        session.apply_profile_patch(&patch);

        let new_skills: Vec<String> = stored
            .skills
            .into_iter()
            .filter(|s| !session.profile.skills.contains(s))
            .collect();
        session.add_skills(new_skills);

        Ok(ToolOutcome::state_changed(session))
    }
}
