//! Reads back agent definitions written by the scaffolder.

use crate::scaffold::agents_dir;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct FrontMatter {
    description: String,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    pub temperature: Option<f64>,
    pub model: Option<String>,
    pub location: PathBuf,
}

pub fn load_agent(path: &Path) -> Result<AgentDefinition> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid agent file name: {}", path.display()))?
        .to_string();

    let frontmatter_str = extract_front_matter(&content)
        .ok_or_else(|| anyhow::anyhow!("No front matter in {}", path.display()))?;

    // Descriptions are written unescaped and may not be valid YAML.
    let frontmatter = match serde_yaml::from_str::<FrontMatter>(&frontmatter_str) {
        Ok(frontmatter) => frontmatter,
        Err(e) => parse_literal_front_matter(&frontmatter_str)
            .ok_or(e)
            .with_context(|| format!("Invalid front matter in {}", path.display()))?,
    };

    Ok(AgentDefinition {
        name,
        description: frontmatter.description,
        temperature: frontmatter.temperature,
        model: frontmatter.model,
        location: path.to_path_buf(),
    })
}

fn extract_front_matter(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }

    let closing = lines[1..].iter().position(|l| l.trim() == "---")?;
    Some(lines[1..=closing].join("\n"))
}

fn parse_literal_front_matter(frontmatter: &str) -> Option<FrontMatter> {
    let mut description = None;
    let mut temperature = None;
    let mut model = None;

    for line in frontmatter.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "description" => description = Some(value.to_string()),
            "temperature" => temperature = value.parse().ok(),
            "model" => model = Some(value.to_string()),
            _ => {}
        }
    }

    Some(FrontMatter {
        description: description?,
        temperature,
        model,
    })
}

/// Every agent under `<root>/.opencode/agents`, sorted by name. Files that
/// fail to parse are skipped.
pub fn list_agents(root: &Path) -> Result<Vec<AgentDefinition>> {
    let dir = agents_dir(root);

    if !dir.exists() {
        tracing::debug!("Agents directory does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read agents directory: {}", dir.display()))?;

    let mut agents = Vec::new();
    for entry in entries {
        let path = entry?.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        match load_agent(&path) {
            Ok(agent) => agents.push(agent),
            Err(e) => tracing::warn!("Skipping agent file {}: {:#}", path.display(), e),
        }
    }

    agents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::{AGENT_MODEL, Scaffolder};
    use tempfile::TempDir;

    #[test]
    fn scaffolded_agent_parses() {
        let tmp = TempDir::new().unwrap();
        let path = Scaffolder::in_dir(tmp.path())
            .scaffold("reviewer", Some("Reviews code"))
            .unwrap();

        let agent = load_agent(&path).unwrap();
        assert_eq!(agent.name, "reviewer");
        assert_eq!(agent.description, "Reviews code");
        assert_eq!(agent.temperature, Some(0.1));
        assert_eq!(agent.model.as_deref(), Some(AGENT_MODEL));
    }

    #[test]
    fn description_with_colon_is_read_literally() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::in_dir(tmp.path());
        let path = scaffolder
            .scaffold("reviewer", Some("Reviews code: carefully"))
            .unwrap();
        scaffolder.scaffold("plain", None).unwrap();

        let agent = load_agent(&path).unwrap();
        assert_eq!(agent.description, "Reviews code: carefully");
        assert_eq!(agent.temperature, Some(0.1));
        assert_eq!(agent.model.as_deref(), Some(AGENT_MODEL));

        let names: Vec<_> = list_agents(tmp.path())
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["plain", "reviewer"]);
    }

    #[test]
    fn front_matter_without_description_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("odd.md");
        fs::write(&path, "---\nmodel: [unclosed\n---\n\nbody\n").unwrap();

        let err = load_agent(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid front matter"));
    }

    #[test]
    fn list_sorts_and_skips_invalid() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::in_dir(tmp.path());
        scaffolder.scaffold("zeta", None).unwrap();
        scaffolder.scaffold("alpha", None).unwrap();

        let dir = agents_dir(tmp.path());
        fs::write(dir.join("broken.md"), "# no front matter\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let names: Vec<_> = list_agents(tmp.path())
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn list_without_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(list_agents(tmp.path()).unwrap().is_empty());
    }
}
