use crate::error::KbError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    Validate,
    Stats,
    RebuildIndex,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Validate => "validate",
            Self::Stats => "stats",
            Self::RebuildIndex => "rebuild-index",
        }
    }

    /// Subcommand understood by the external knowledge-base script.
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Validate => "validate",
            Self::Stats => "stats",
            Self::RebuildIndex => "index",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "validate" => Ok(Self::Validate),
            "stats" => Ok(Self::Stats),
            "rebuild-index" | "index" => Ok(Self::RebuildIndex),
            other => Err(KbError::InvalidRequest(format!(
                "unknown operation '{}'. Available: search, validate, stats, rebuild-index",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    Project,
    Shared,
    #[default]
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Shared => "shared",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "shared" => Ok(Self::Shared),
            "all" => Ok(Self::All),
            other => Err(KbError::InvalidRequest(format!(
                "invalid scope '{}'. Expected one of: project, shared, all",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KbRequest {
    Search {
        query: String,
        scope: Scope,
        category: Option<String>,
    },
    Validate {
        path: String,
    },
    Stats,
    RebuildIndex {
        force: bool,
    },
}

impl KbRequest {
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
            scope: Scope::default(),
            category: None,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Search { .. } => Operation::Search,
            Self::Validate { .. } => Operation::Validate,
            Self::Stats => Operation::Stats,
            Self::RebuildIndex { .. } => Operation::RebuildIndex,
        }
    }

    /// Argument tokens for the external script, subcommand first. Each
    /// parameter is exactly one token.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.operation().subcommand().to_string()];

        match self {
            Self::Search {
                query,
                scope,
                category,
            } => {
                args.push(query.clone());
                args.push("--scope".to_string());
                args.push(scope.as_str().to_string());
                if let Some(category) = category.as_deref().filter(|c| !c.is_empty()) {
                    args.push("--category".to_string());
                    args.push(category.to_string());
                }
            }
            Self::Validate { path } => args.push(path.clone()),
            Self::Stats => {}
            Self::RebuildIndex { force } => {
                if *force {
                    args.push("--force".to_string());
                }
            }
        }

        args
    }

    /// Builds a request from a parameter mapping such as a tool call's
    /// JSON arguments.
    pub fn from_params(operation: Operation, params: &Value) -> Result<Self, KbError> {
        match operation {
            Operation::Search => {
                let query = required_str(params, "query")?;
                let scope = match optional_str(params, "scope")? {
                    Some(scope) => scope.parse()?,
                    None => Scope::default(),
                };
                let category = optional_str(params, "category")?
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                Ok(Self::Search {
                    query: query.to_string(),
                    scope,
                    category,
                })
            }
            Operation::Validate => Ok(Self::Validate {
                path: required_str(params, "path")?.to_string(),
            }),
            Operation::Stats => Ok(Self::Stats),
            Operation::RebuildIndex => {
                let force = match params.get("force") {
                    None | Some(Value::Null) => false,
                    Some(Value::Bool(force)) => *force,
                    Some(_) => {
                        return Err(KbError::InvalidRequest(
                            "'force' must be a boolean".to_string(),
                        ));
                    }
                };
                Ok(Self::RebuildIndex { force })
            }
        }
    }
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, KbError> {
    optional_str(params, key)?
        .ok_or_else(|| KbError::InvalidRequest(format!("Missing '{}' parameter", key)))
}

fn optional_str<'a>(params: &'a Value, key: &str) -> Result<Option<&'a str>, KbError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(KbError::InvalidRequest(format!(
            "'{}' must be a string",
            key
        ))),
    }
}
