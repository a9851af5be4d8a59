//! Invocation options for `seedling create`
//!
//! Built field by field from parsed arguments. The parser's own result type
//! never reaches the manifest builder, so nothing parser-specific can leak
//! into `package.json`.

use serde_json::Value;
use std::collections::BTreeMap;

/// Everything the user can say about the project being created
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOptions {
    /// Target directory, also the package name
    pub name: String,
    /// Run the package manager after scaffolding
    pub install: bool,

    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub engines: BTreeMap<String, String>,

    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub homepage: Option<String>,
    pub bugs: Option<String>,
    pub description: Option<String>,
    pub repository: Option<String>,

    /// Extra top-level fields copied verbatim into the manifest
    pub custom: BTreeMap<String, Value>,
}

impl CreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_install(mut self, install: bool) -> Self {
        self.install = install;
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), range.into());
        self
    }

    pub fn with_dev_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.dev_dependencies.insert(name.into(), range.into());
        self
    }

    pub fn with_script(mut self, name: impl Into<String>, command: impl Into<String>) -> Self {
        self.scripts.insert(name.into(), command.into());
        self
    }

    pub fn with_engine(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.engines.insert(name.into(), range.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }
}

/// Split a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Interpret a `--field` value: valid JSON stays typed, anything else is a string
pub fn parse_field_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
