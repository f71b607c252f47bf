//! Tool system: the operations the agent exposes to the LLM runtime.

pub mod arguments;
pub mod builtin;
pub mod registry;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use registry::{DispatchResult, ToolRegistry};
pub use tool::Tool;
pub use types::{ToolDescriptor, ToolOutcome, ToolParameters};
