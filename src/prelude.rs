//! Convenience re-exports for hosts embedding the agent.

pub use crate::config::{QuestlineConfig, ServiceConfig};
pub use crate::error::{QuestlineError, Result};
pub use crate::events::{state_snapshot, SessionEvent};
pub use crate::gateway::{
    Gateways, GraphFact, GraphService, MemoryService, ProfileStore, StoredProfile,
};
pub use crate::state::{
    ProfileData, ProfilePatch, SessionState, Stage, ANONYMOUS_USER_ID,
};
pub use crate::tools::{
    DispatchResult, Tool, ToolArguments, ToolDescriptor, ToolOutcome, ToolParameters, ToolRegistry,
};
