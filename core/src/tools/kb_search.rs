use crate::dispatch::{Dispatcher, KbRequest, Operation};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct KbSearchTool {
    dispatcher: Arc<Dispatcher>,
}

impl KbSearchTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Tool for KbSearchTool {
    fn name(&self) -> &str {
        "kb_search"
    }

    fn description(&self) -> &str {
        "Search the knowledge base for existing patterns or errors"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query term"
                },
                "scope": {
                    "type": "string",
                    "enum": ["project", "shared", "all"],
                    "description": "Search scope"
                },
                "category": {
                    "type": "string",
                    "description": "Filter by category (e.g. python, docker)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let request = KbRequest::from_params(Operation::Search, &args)?;
        let output = self.dispatcher.dispatch(&request).await?;
        Ok(ToolResult::success(output))
    }
}
