//! Knowledge-graph tools. Same boundary rule as the memory tools: every
//! failure resolves to a descriptive string.

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::gateway::{GraphFact, Gateways};
use crate::state::SessionState;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

const DEFAULT_SEARCH_LIMIT: usize = 5;

/// `add_graph_fact`: attach a structured fact to the user's graph.
pub struct AddGraphFact {
    parameters: ToolParameters,
}

impl AddGraphFact {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("user_id", "The user the fact belongs to", true)
                .string(
                    "fact_type",
                    "Fact category, e.g. \"skill\" or \"role_history\"",
                    true,
                )
                .object_value("data", "Structured fact payload", true)
                .build(),
        }
    }
}

impl Default for AddGraphFact {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AddGraphFact {
    fn name(&self) -> &str {
        "add_graph_fact"
    }

    fn description(&self) -> &str {
        "Add a structured fact about the user to the knowledge graph."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let user_id = args.get_str("user_id")?;
        let fact = GraphFact {
            kind: args.get_str("fact_type")?.to_string(),
            data: args.get_object("data")?.clone(),
        };

        match gateways.graph.add_fact(user_id, &fact).await {
            Ok(()) => Ok(ToolOutcome::text(format!(
                "Added {} fact to the graph.",
                fact.kind
            ))),
            Err(e) => {
                warn!(user_id, error = %e, "graph add failed");
                Ok(ToolOutcome::text(format!("Error adding to graph: {e}")))
            }
        }
    }
}

/// `search_graph`: query the user's graph edges.
pub struct SearchGraph {
    parameters: ToolParameters,
}

impl SearchGraph {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("user_id", "The user whose graph to search", true)
                .string("query", "What to look for", true)
                .integer("limit", "Maximum results, defaults to 5", false)
                .build(),
        }
    }
}

impl Default for SearchGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchGraph {
    fn name(&self) -> &str {
        "search_graph"
    }

    fn description(&self) -> &str {
        "Search the user's knowledge graph for relevant facts."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let user_id = args.get_str("user_id")?;
        let query = args.get_str("query")?;
        let limit = args.get_usize_or("limit", DEFAULT_SEARCH_LIMIT)?;

        match gateways.graph.search(user_id, query, limit).await {
            Ok(Some(facts)) if !facts.is_empty() => Ok(ToolOutcome::text(facts.join("\n"))),
            Ok(_) => Ok(ToolOutcome::text("No relevant information found.")),
            Err(e) => {
                warn!(user_id, query, error = %e, "graph search failed");
                Ok(ToolOutcome::text(format!("Error searching graph: {e}")))
            }
        }
    }
}

/// `get_user_context`: everything the graph knows about the user.
pub struct GetUserContext {
    parameters: ToolParameters,
}

impl GetUserContext {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("user_id", "The user to look up", true)
                .build(),
        }
    }
}

impl Default for GetUserContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetUserContext {
    fn name(&self) -> &str {
        "get_user_context"
    }

    fn description(&self) -> &str {
        "Retrieve everything the knowledge graph holds about the user."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let user_id = args.get_str("user_id")?;

        match gateways.graph.get_user(user_id).await {
            Ok(Some(facts)) if !facts.is_empty() => Ok(ToolOutcome::text(facts.join("\n"))),
            Ok(_) => Ok(ToolOutcome::text("No user context found.")),
            Err(e) => {
                warn!(user_id, error = %e, "graph get_user failed");
                Ok(ToolOutcome::text(format!(
                    "Error retrieving user context: {e}"
                )))
            }
        }
    }
}
