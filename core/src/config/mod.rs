use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".kbkit.toml";

/// How the external knowledge-base script is launched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KbConfig {
    pub program: String,
    pub script: String,
    pub working_dir: Option<PathBuf>,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            script: "tools/kb.py".to_string(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub kb: KbConfig,
}

impl Config {
    /// Reads `<root>/.kbkit.toml` when it exists, defaults otherwise.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = get_config_path(root);
        if path.exists() {
            load_config(&path)
        } else {
            Ok(Config::default())
        }
    }
}

pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Loaded config");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.kb.program, "python");
        assert_eq!(config.kb.script, "tools/kb.py");
        assert!(config.kb.working_dir.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "[kb]\nprogram = \"python3\"\n",
        )
        .unwrap();

        let config = Config::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.kb.program, "python3");
        assert_eq!(config.kb.script, "tools/kb.py");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "[kb\nprogram = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(&tmp.path().join("nope.toml")).is_err());
    }
}
