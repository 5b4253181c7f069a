use crate::dispatch::Dispatcher;
use crate::registry::ToolRegistry;
use std::sync::Arc;

pub mod kb_index;
pub mod kb_search;
pub mod kb_stats;
pub mod kb_validate;

pub use kb_index::KbIndexTool;
pub use kb_search::KbSearchTool;
pub use kb_stats::KbStatsTool;
pub use kb_validate::KbValidateTool;

/// Registers `kb_search`, `kb_validate`, `kb_stats` and `kb_index`, all
/// sharing one dispatcher.
pub fn register_kb_tools(registry: &ToolRegistry, dispatcher: Arc<Dispatcher>) {
    registry.register(Box::new(KbSearchTool::new(dispatcher.clone())));
    registry.register(Box::new(KbValidateTool::new(dispatcher.clone())));
    registry.register(Box::new(KbStatsTool::new(dispatcher.clone())));
    registry.register(Box::new(KbIndexTool::new(dispatcher)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KbConfig;
    use crate::dispatch::testing::RecordingRunner;
    use serde_json::json;

    fn registry_with(runner: Arc<RecordingRunner>) -> ToolRegistry {
        let registry = ToolRegistry::new();
        let dispatcher = Arc::new(Dispatcher::new(KbConfig::default(), runner));
        register_kb_tools(&registry, dispatcher);
        registry
    }

    #[test]
    fn registers_four_tools() {
        let registry = registry_with(Arc::new(RecordingRunner::ok("")));
        let names: Vec<_> = registry.get_specs().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["kb_search", "kb_validate", "kb_stats", "kb_index"]);
    }

    #[test]
    fn search_schema_lists_scopes() {
        let registry = registry_with(Arc::new(RecordingRunner::ok("")));
        let spec = registry
            .get_specs()
            .into_iter()
            .find(|s| s.name == "kb_search")
            .unwrap();
        assert_eq!(
            spec.parameters_schema["properties"]["scope"]["enum"],
            json!(["project", "shared", "all"])
        );
        assert_eq!(spec.parameters_schema["required"], json!(["query"]));
    }

    #[tokio::test]
    async fn search_tool_reports_failure_as_success_text() {
        let runner = Arc::new(RecordingRunner::exits(1, "", "no index"));
        let result = registry_with(runner.clone())
            .execute("kb_search", json!({"query": "foo bar", "category": "python"}))
            .await;

        assert!(result.success);
        assert_eq!(
            result.output,
            "Error executing search: Command failed with exit code 1: no index"
        );
        assert_eq!(
            runner.last_args(),
            vec![
                "tools/kb.py",
                "search",
                "foo bar",
                "--scope",
                "all",
                "--category",
                "python"
            ]
        );
    }

    #[tokio::test]
    async fn validate_tool_returns_report() {
        let runner = Arc::new(RecordingRunner::exits(1, "- a.yaml: Root is not a dict\n", ""));
        let result = registry_with(runner)
            .execute("kb_validate", json!({"path": "a.yaml"}))
            .await;

        assert!(result.success);
        assert_eq!(result.output, "- a.yaml: Root is not a dict\n");
    }

    #[tokio::test]
    async fn stats_tool_failure_is_execution_failure() {
        let runner = Arc::new(RecordingRunner::exits(1, "", "boom"));
        let result = registry_with(runner)
            .execute("kb_stats", json!({}))
            .await;

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Execution failed: Command failed with exit code 1: boom")
        );
    }

    #[tokio::test]
    async fn index_tool_passes_force() {
        let runner = Arc::new(RecordingRunner::ok("built\n"));
        let result = registry_with(runner.clone())
            .execute("kb_index", json!({"force": true}))
            .await;

        assert!(result.success);
        assert_eq!(result.output, "built\n");
        assert_eq!(runner.last_args(), vec!["tools/kb.py", "index", "--force"]);
    }

    #[tokio::test]
    async fn missing_parameter_never_spawns() {
        let runner = Arc::new(RecordingRunner::ok(""));
        let result = registry_with(runner.clone())
            .execute("kb_validate", json!({}))
            .await;

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Execution failed: Invalid request: Missing 'path' parameter")
        );
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn validate_tool_rejects_non_string_path() {
        let runner = Arc::new(RecordingRunner::ok(""));
        let result = registry_with(runner.clone())
            .execute("kb_validate", json!({"path": 3}))
            .await;

        assert_eq!(
            result.error.as_deref(),
            Some("Execution failed: Invalid request: 'path' must be a string")
        );
        assert_eq!(runner.call_count(), 0);
    }
}
