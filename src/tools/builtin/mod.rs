//! Built-in tools: the fixed operation set the agent exposes.

pub mod consent;
pub mod db;
pub mod graph;
pub mod jobs;
pub mod memory;
pub mod profile;
pub mod stage;
pub mod weather;

pub use consent::{CheckConsent, SetConsent};
pub use db::{AddNeedToDb, AddSkillToDb, LoadProfileFromDb, SaveProfileToDb, NOT_LOGGED_IN};
pub use graph::{AddGraphFact, GetUserContext, SearchGraph};
pub use jobs::{fabricate_jobs, JobListing, SearchJobs};
pub use memory::{GetMemory, SaveToMemory, SearchMemory};
pub use profile::{AddSkills, GetProfile, SetSkills, UpdateProfile};
pub use stage::SetStage;
pub use weather::GetWeather;

use std::sync::Arc;

use super::tool::Tool;

/// Every built-in tool, in the order the runtime lists them.
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetProfile::new()),
        Arc::new(UpdateProfile::new()),
        Arc::new(AddSkills::new()),
        Arc::new(SetSkills::new()),
        Arc::new(SetConsent::new()),
        Arc::new(CheckConsent::new()),
        Arc::new(SetStage::new()),
        Arc::new(SearchJobs::new()),
        Arc::new(GetWeather::new()),
        Arc::new(SaveToMemory::new()),
        Arc::new(GetMemory::new()),
        Arc::new(SearchMemory::new()),
        Arc::new(AddGraphFact::new()),
        Arc::new(SearchGraph::new()),
        Arc::new(GetUserContext::new()),
        Arc::new(SaveProfileToDb::new()),
        Arc::new(AddSkillToDb::new()),
        Arc::new(AddNeedToDb::new()),
        Arc::new(LoadProfileFromDb::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique() {
        let tools = all_tools();
        let names: HashSet<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), tools.len());
    }
}
