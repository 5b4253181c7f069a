use crate::dispatch::{Dispatcher, KbRequest, Operation};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct KbValidateTool {
    dispatcher: Arc<Dispatcher>,
}

impl KbValidateTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Tool for KbValidateTool {
    fn name(&self) -> &str {
        "kb_validate"
    }

    fn description(&self) -> &str {
        "Validate YAML files against the schema"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to file or directory to validate"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let request = KbRequest::from_params(Operation::Validate, &args)?;
        let output = self.dispatcher.dispatch(&request).await?;
        Ok(ToolResult::success(output))
    }
}
