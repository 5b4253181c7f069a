//! Writes opencode agent definitions from a fixed template.

pub mod template;

pub use template::{AGENT_MODEL, AGENT_TEMPERATURE, render_agent};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const AGENTS_DIR: &str = ".opencode/agents";
pub const DEFAULT_DESCRIPTION: &str = "Custom agent";
pub const USAGE: &str = "Usage: scaffold-agent <agent-name> [description]";

/// The two filesystem effects the scaffolder needs.
pub trait Filesystem {
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        std::fs::write(path, content)
    }
}

pub fn agents_dir(root: &Path) -> PathBuf {
    root.join(AGENTS_DIR)
}

pub fn agent_path(root: &Path, name: &str) -> PathBuf {
    agents_dir(root).join(format!("{}.md", name))
}

pub struct Scaffolder<F: Filesystem = StdFilesystem> {
    fs: F,
    root: PathBuf,
}

impl Scaffolder<StdFilesystem> {
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self::new(StdFilesystem, root)
    }
}

impl<F: Filesystem> Scaffolder<F> {
    pub fn new(fs: F, root: impl AsRef<Path>) -> Self {
        Self {
            fs,
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Writes `<root>/.opencode/agents/<name>.md`, replacing any existing
    /// file. An empty description means the default one. Nothing is rolled back if the write fails after the directory
    /// was created.
    pub fn scaffold(&self, name: &str, description: Option<&str>) -> Result<PathBuf> {
        if name.is_empty() {
            anyhow::bail!("{}", USAGE);
        }

        let description = description
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        let dir = agents_dir(&self.root);
        let path = agent_path(&self.root, name);

        self.fs
            .create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        self.fs
            .write(&path, &render_agent(name, description))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(agent = name, path = %path.display(), "Agent scaffolded");

        Ok(path)
    }
}
