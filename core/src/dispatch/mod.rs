//! Translates knowledge-base requests into invocations of the external
//! script and normalizes what comes back.
//!
//! `search` and `validate` always produce text; `stats` and `rebuild_index`
//! hand failures back to the caller untouched.

pub mod process;
pub mod request;

pub use process::ProcessRunner;
pub use request::{KbRequest, Operation, Scope};

use crate::config::KbConfig;
use crate::error::KbError;
use crate::traits::{CommandRunner, Invocation};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Dispatcher {
    config: KbConfig,
    runner: Arc<dyn CommandRunner>,
}

impl Dispatcher {
    pub fn new(config: KbConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    pub fn with_process_runner(config: KbConfig) -> Self {
        Self::new(config, Arc::new(ProcessRunner::new()))
    }

    pub fn invocation(&self, request: &KbRequest) -> Invocation {
        Invocation::new(&self.config.program)
            .arg(&self.config.script)
            .args(request.args())
            .current_dir(self.config.working_dir.clone())
    }

    /// Runs the request once and returns its standard output. A non-zero exit
    /// becomes `KbError::Failed` carrying both captured streams.
    pub async fn execute(&self, request: &KbRequest) -> Result<String, KbError> {
        let invocation = self.invocation(request);
        let operation = request.operation();
        debug!(%operation, command = %invocation, "Running knowledge-base command");

        let output = self.runner.run(&invocation).await?;

        if output.success() {
            return Ok(output.stdout);
        }

        warn!(%operation, code = ?output.code, "Knowledge-base command failed");
        Err(KbError::Failed {
            operation,
            code: output.code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    pub async fn search(&self, query: &str, scope: Scope, category: Option<&str>) -> String {
        let request = KbRequest::Search {
            query: query.to_string(),
            scope,
            category: category.map(str::to_string),
        };

        match self.execute(&request).await {
            Ok(output) => output,
            Err(e) => format!("Error executing search: {}", e),
        }
    }

    /// The script reports validation problems on stdout and exits 1, so the
    /// report is kept whenever there is one.
    pub async fn validate(&self, path: &str) -> String {
        let request = KbRequest::Validate {
            path: path.to_string(),
        };

        match self.execute(&request).await {
            Ok(output) => output,
            Err(e) => match e.captured_stdout() {
                Some(report) => report.to_string(),
                None => e.to_string(),
            },
        }
    }

    pub async fn stats(&self) -> Result<String, KbError> {
        self.execute(&KbRequest::Stats).await
    }

    pub async fn rebuild_index(&self, force: bool) -> Result<String, KbError> {
        self.execute(&KbRequest::RebuildIndex { force }).await
    }

    /// Routes a request to its operation, keeping each operation's error
    /// behavior.
    pub async fn dispatch(&self, request: &KbRequest) -> Result<String, KbError> {
        match request {
            KbRequest::Search {
                query,
                scope,
                category,
            } => Ok(self.search(query, *scope, category.as_deref()).await),
            KbRequest::Validate { path } => Ok(self.validate(path).await),
            KbRequest::Stats => self.stats().await,
            KbRequest::RebuildIndex { force } => self.rebuild_index(*force).await,
        }
    }
}
