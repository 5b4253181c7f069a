pub mod runner;
pub mod tool;

pub use runner::{CommandOutput, CommandRunner, Invocation};
pub use tool::{Tool, ToolResult, ToolSpec};
