use crate::traits::{Tool, ToolResult, ToolSpec};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct ToolRegistry {
    tools: Mutex<Vec<Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Mutex::new(Vec::new()),
        }
    }

    fn tools(&self) -> MutexGuard<'_, Vec<Arc<dyn Tool>>> {
        self.tools.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a tool. A tool registered under an existing name replaces it.
    pub fn register(&self, tool: Box<dyn Tool>) {
        let mut tools = self.tools();
        let tool: Arc<dyn Tool> = Arc::from(tool);
        match tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => tools[index] = tool,
            None => tools.push(tool),
        }
    }

    pub fn get_specs(&self) -> Vec<ToolSpec> {
        self.tools().iter().map(|t| t.spec()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name() == name)
    }

    pub async fn execute(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let tool = self.tools().iter().find(|t| t.name() == name).cloned();

        match tool {
            Some(tool) => {
                tracing::debug!(tool = name, "Executing tool");
                match tool.execute(args).await {
                    Ok(result) => result,
                    Err(e) => ToolResult::error(format!("Execution failed: {}", e)),
                }
            }
            None => ToolResult::error(format!("Tool '{}' not found", name)),
        }
    }
}
