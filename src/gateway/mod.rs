//! Thin request/response adapters to the external collaborators.
//!
//! Each gateway operation maps one tool intent to exactly one external call:
//! build request, issue call, extract the minimal payload. No retries, no
//! backoff, no batching. Failures surface as [`crate::error::QuestlineError`]
//! and are converted to descriptive strings at the tool boundary, never
//! propagated into the conversation turn.

pub mod db;
pub mod graph;
pub mod memory;

pub use db::{PgProfileStore, ProfileStore, StoredProfile};
pub use graph::{GraphClient, GraphFact, GraphService};
pub use memory::{MemoryClient, MemoryService};

use std::sync::Arc;

use crate::config::QuestlineConfig;
use crate::error::Result;

/// The injected set of external collaborators.
///
/// Built once by the hosting process and shared across sessions; every
/// operation is self-contained, so concurrent use from independent sessions
/// needs no coordination here.
#[derive(Clone)]
pub struct Gateways {
    pub memory: Arc<dyn MemoryService>,
    pub graph: Arc<dyn GraphService>,
    pub store: Arc<dyn ProfileStore>,
}

impl Gateways {
    /// Assemble from already-constructed services (tests inject mocks here).
    pub fn new(
        memory: Arc<dyn MemoryService>,
        graph: Arc<dyn GraphService>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            memory,
            graph,
            store,
        }
    }

    /// Build the production gateways from configuration.
    pub async fn connect(config: &QuestlineConfig) -> Result<Self> {
        let store = PgProfileStore::connect(&config.database_url).await?;
        Ok(Self {
            memory: Arc::new(MemoryClient::new(&config.memory)),
            graph: Arc::new(GraphClient::new(&config.graph)),
            store: Arc::new(store),
        })
    }
}

impl std::fmt::Debug for Gateways {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateways").finish_non_exhaustive()
    }
}
