//! Per-session conversation state.
//!
//! One [`SessionState`] lives for the duration of a conversation and is
//! mutated only through the merge-write methods here. Every effective write
//! bumps `revision`, which the dispatcher reads to decide whether a call
//! changed state and therefore warrants a snapshot event.

pub mod patch;

pub use patch::ProfilePatch;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reserved user id for an unauthenticated, ephemeral session.
///
/// Database-backed tools short-circuit on this value and keep everything
/// session-only.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// Conversation phase. Advanced only by an explicit `set_stage` tool call;
/// there is no automatic transition.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    #[default]
    Onboarding,
    Enrichment,
    Trinity,
}

/// Career profile fields collected over the conversation.
///
/// Scalars are `None` until a tool writes a non-empty value. `skills` is
/// ordered and append-only except for a full replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub day_rate: Option<String>,
    pub availability: Option<String>,
    pub work_style: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// The live, versioned record for one conversation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user_id: String,
    pub stage: Stage,
    pub profile: ProfileData,
    #[serde(default)]
    pub consents: HashMap<String, bool>,
    #[serde(default)]
    pub jobs_shown: usize,
    /// Bumped by every effective mutation.
    #[serde(default)]
    pub revision: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ANONYMOUS_USER_ID)
    }
}

impl SessionState {
    /// Fresh all-default state for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            stage: Stage::default(),
            profile: ProfileData::default(),
            consents: HashMap::new(),
            jobs_shown: 0,
            revision: 0,
        }
    }

    /// Whether this session belongs to the anonymous sentinel user.
    pub fn is_anonymous(&self) -> bool {
        self.user_id == ANONYMOUS_USER_ID
    }

    /// Merge-write the scalar profile fields. Non-empty patch values
    /// overwrite; absent or empty values leave the prior value untouched.
    ///
    /// Returns `true` when any field changed.
    pub fn apply_profile_patch(&mut self, patch: &ProfilePatch) -> bool {
        let changed = patch.apply(&mut self.profile);
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Append skills in order. No deduplication; the list never shrinks here.
    pub fn add_skills(&mut self, skills: impl IntoIterator<Item = String>) {
        let before = self.profile.skills.len();
        self.profile.skills.extend(skills);
        if self.profile.skills.len() != before {
            self.revision += 1;
        }
    }

    /// Replace the entire skill list, discarding prior contents.
    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.profile.skills = skills;
        self.revision += 1;
    }

    /// Record a consent decision. Keys are added, never removed;
    /// last write wins.
    pub fn set_consent(&mut self, consent_type: impl Into<String>, granted: bool) {
        self.consents.insert(consent_type.into(), granted);
        self.revision += 1;
    }

    /// Whether consent was granted. Unknown keys are `false`, never a default
    /// grant.
    pub fn consent_granted(&self, consent_type: &str) -> bool {
        self.consents.get(consent_type).copied().unwrap_or(false)
    }

    /// Overwrite the conversation stage.
    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
        self.revision += 1;
    }

    /// Record how many search results were last surfaced.
    pub fn set_jobs_shown(&mut self, count: usize) {
        self.jobs_shown = count;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn skills_append_preserves_order_and_duplicates() {
        let mut state = SessionState::default();
        state.add_skills(vec!["rust".into(), "sql".into()]);
        state.add_skills(vec!["rust".into()]);

        assert_eq!(state.profile.skills, vec!["rust", "sql", "rust"]);
        assert_eq!(state.revision, 2);
    }

    #[test]
    fn skills_replace_discards_prior_contents() {
        let mut state = SessionState::default();
        state.add_skills(vec!["rust".into(), "sql".into()]);
        state.set_skills(vec!["golang".into()]);

        assert_eq!(state.profile.skills, vec!["golang"]);
    }

    #[test]
    fn empty_append_does_not_bump_revision() {
        let mut state = SessionState::default();
        state.add_skills(Vec::new());

        assert_eq!(state.revision, 0);
    }

    #[test]
    fn unknown_consent_is_false() {
        let state = SessionState::default();
        assert!(!state.consent_granted("linkedin_access"));
    }

    #[test]
    fn consent_last_write_wins() {
        let mut state = SessionState::default();
        state.set_consent("linkedin_access", true);
        assert!(state.consent_granted("linkedin_access"));

        state.set_consent("linkedin_access", false);
        assert!(!state.consent_granted("linkedin_access"));
        assert_eq!(state.consents.len(), 1);
    }

    #[test]
    fn stage_parses_from_snake_case() {
        assert_eq!(Stage::from_str("enrichment").unwrap(), Stage::Enrichment);
        assert_eq!(Stage::from_str("trinity").unwrap(), Stage::Trinity);
        assert!(Stage::from_str("retired").is_err());
    }

    #[test]
    fn default_state_is_anonymous_onboarding() {
        let state = SessionState::default();
        assert!(state.is_anonymous());
        assert_eq!(state.stage, Stage::Onboarding);
        assert_eq!(state.jobs_shown, 0);
    }
}
