//! Consent tools. Consent is never assumed: unknown keys read as not granted.

use async_trait::async_trait;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::SessionState;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// `set_consent`: record a grant or refusal.
pub struct SetConsent {
    parameters: ToolParameters,
}

impl SetConsent {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string(
                    "consent_type",
                    "What the consent covers, e.g. \"linkedin_access\"",
                    true,
                )
                .boolean("granted", "Whether the user granted it", true)
                .build(),
        }
    }
}

impl Default for SetConsent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SetConsent {
    fn name(&self) -> &str {
        "set_consent"
    }

    fn description(&self) -> &str {
        "Record the user's consent decision. Call only after the user has \
         explicitly answered."
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
        let consent_type = args.get_str("consent_type")?;
        let granted = args.get_bool("granted")?;
        session.set_consent(consent_type, granted);
        Ok(ToolOutcome::state_changed(session))
    }
}

/// `check_consent`: read a consent decision; unknown keys are `false`.
pub struct CheckConsent {
    parameters: ToolParameters,
}

impl CheckConsent {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("consent_type", "The consent to look up", true)
                .build(),
        }
    }
}

impl Default for CheckConsent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CheckConsent {
    fn name(&self) -> &str {
        "check_consent"
    }

    fn description(&self) -> &str {
        "Check whether the user granted a consent. Returns false when never asked."
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
        let consent_type = args.get_str("consent_type")?;
        Ok(ToolOutcome::data(serde_json::json!(
            session.consent_granted(consent_type)
        )))
    }
}
