use crate::dispatch::Dispatcher;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct KbStatsTool {
    dispatcher: Arc<Dispatcher>,
}

impl KbStatsTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Tool for KbStatsTool {
    fn name(&self) -> &str {
        "kb_stats"
    }

    fn description(&self) -> &str {
        "Show statistics about the knowledge base"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let output = self.dispatcher.stats().await?;
        Ok(ToolResult::success(output))
    }
}
