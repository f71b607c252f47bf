//! Job search placeholder.
//!
//! Returns fabricated listings until a real job board integration lands.
//! TODO: replace the stub with the jobs API gateway once the board contract
//! is settled.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::SessionState;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// One fabricated job listing.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub day_rate: String,
}

/// Fixed-shape stub result set: three listings whose titles contain `role`
/// and whose location is `location` verbatim.
pub fn fabricate_jobs(role: &str, location: &str) -> Vec<JobListing> {
    vec![
        JobListing {
            id: "job-1".into(),
            title: format!("Senior {role}"),
            company: "Nimbus Labs".into(),
            location: location.to_string(),
            day_rate: "£650".into(),
        },
        JobListing {
            id: "job-2".into(),
            title: format!("Lead {role}"),
            company: "Foundry & Sons".into(),
            location: location.to_string(),
            day_rate: "£720".into(),
        },
        JobListing {
            id: "job-3".into(),
            title: format!("{role} Consultant"),
            company: "Harbourview Partners".into(),
            location: location.to_string(),
            day_rate: "£580".into(),
        },
    ]
}

/// `search_jobs`: surface listings and record how many were shown.
pub struct SearchJobs {
    parameters: ToolParameters,
}

impl SearchJobs {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("role", "Role to search for, e.g. \"Engineer\"", true)
                .string("location", "Where the jobs should be located", true)
                .build(),
        }
    }
}

impl Default for SearchJobs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchJobs {
    fn name(&self) -> &str {
        "search_jobs"
    }

    fn description(&self) -> &str {
        "Search for contract roles matching a role and location."
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
        let role = args.get_str("role")?;
        let location = args.get_str("location")?;

        let jobs = fabricate_jobs(role, location);
        session.set_jobs_shown(jobs.len());

        Ok(ToolOutcome::data(serde_json::json!({ "jobs": jobs })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_jobs_carry_role_and_location() {
        let jobs = fabricate_jobs("Engineer", "London");

        assert_eq!(jobs.len(), 3);
        for job in &jobs {
            assert!(job.title.contains("Engineer"));
            assert_eq!(job.location, "London");
        }
    }
}
