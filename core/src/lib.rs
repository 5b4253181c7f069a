pub mod agents;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod scaffold;
pub mod tools;
pub mod traits;

pub use agents::{AgentDefinition, list_agents, load_agent};
pub use config::{Config, KbConfig};
pub use dispatch::{Dispatcher, KbRequest, Operation, ProcessRunner, Scope};
pub use error::KbError;
pub use registry::ToolRegistry;
pub use scaffold::{Scaffolder, render_agent};
pub use tools::register_kb_tools;
pub use traits::*;
