use crate::dispatch::Operation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KbError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", failure_message(*code, stderr))]
    Failed {
        operation: Operation,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl KbError {
    /// Captured standard output of a process that exited non-zero.
    pub fn captured_stdout(&self) -> Option<&str> {
        match self {
            Self::Failed { stdout, .. } if !stdout.is_empty() => Some(stdout),
            _ => None,
        }
    }
}

fn failure_message(code: Option<i32>, stderr: &str) -> String {
    let head = match code {
        Some(code) => format!("Command failed with exit code {}", code),
        None => "Command terminated by signal".to_string(),
    };

    let stderr = stderr.trim();
    if stderr.is_empty() {
        head
    } else {
        format!("{}: {}", head, stderr)
    }
}
