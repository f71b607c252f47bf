//! Weather placeholder tool.

use async_trait::async_trait;

use crate::error::Result;
use crate::gateway::Gateways;
use crate::state::SessionState;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;
use crate::tools::types::{ToolOutcome, ToolParameters};

/// `get_weather`: canned response, no external call.
pub struct GetWeather {
    parameters: ToolParameters,
}

impl GetWeather {
    pub fn new() -> Self {
        Self {
            parameters: ToolParameters::object()
                .string("location", "Location, fully spelled out", true)
                .build(),
        }
    }
}

impl Default for GetWeather {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetWeather {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get the weather for a given location. Ensure location is fully spelled out."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _session: &mut SessionState,
        _gateways: &Gateways,
    ) -> Result<ToolOutcome> {
        let location = args.get_str("location")?;
        Ok(ToolOutcome::text(format!(
            "The weather in {location} is sunny."
        )))
    }
}
