//! Tool system — callable capabilities handed to the agent-execution engine.

pub mod arguments;
pub mod builtin;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use tool::{AgentTool, Tool, ToolExecutionContext};
pub use types::ToolParameters;
