//! Questline: career-assistant agent toolkit.
//!
//! Defines the tools a conversational career agent exposes to its LLM
//! runtime, the per-session state those tools read and mutate, and thin
//! gateways to the external collaborators (hosted memory, knowledge graph,
//! Postgres). The LLM runtime itself is out of scope: a host process builds
//! the gateways once, constructs one [`state::SessionState`] per
//! conversation, and drives [`tools::ToolRegistry::dispatch`].
//!
//! # Quick Start
//!
//! ```no_run
//! use questline::prelude::*;
//!
//! # async fn example() -> questline::error::Result<()> {
//! let config = QuestlineConfig::from_env()?;
//! let gateways = Gateways::connect(&config).await?;
//! let registry = ToolRegistry::with_builtin_tools();
//!
//! let mut session = SessionState::new("user-42");
//! let result = registry
//!     .dispatch(
//!         "update_profile",
//!         serde_json::json!({ "role": "CTO" }),
//!         &mut session,
//!         &gateways,
//!     )
//!     .await?;
//!
//! if let Some(event) = result.event {
//!     // forward the snapshot to the runtime's observers
//!     let _ = event;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod gateway;
pub mod prelude;
pub mod state;
pub mod tools;
