use crate::dispatch::{Dispatcher, KbRequest, Operation};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct KbIndexTool {
    dispatcher: Arc<Dispatcher>,
}

impl KbIndexTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Tool for KbIndexTool {
    fn name(&self) -> &str {
        "kb_index"
    }

    fn description(&self) -> &str {
        "Rebuild the search index (run after adding files)"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "force": {
                    "type": "boolean",
                    "description": "Force full rebuild"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let request = KbRequest::from_params(Operation::RebuildIndex, &args)?;
        let output = self.dispatcher.dispatch(&request).await?;
        Ok(ToolResult::success(output))
    }
}
