//! package.json generation
//!
//! [`build`] turns [`CreateOptions`] into a [`Manifest`]. It is pure: no
//! filesystem access, same input gives the same output.
//!
//! Merge rules:
//!
//! | Field | Rule |
//! |-------|------|
//! | `dependencies`, `devDependencies`, `scripts`, `engines` | defaults, then overrides on top |
//! | `version`, `license`, `description` | override or default |
//! | `author` | `{name}` from override or default |
//! | `homepage` | override or `https://github.com/<org>/<name>` |
//! | `bugs` | `{url}` from override or `<homepage>/issues` |
//! | `repository` | `{type: "git", url}` only when given |
//! | anything else | copied verbatim unless it names a field above |

use crate::config::ProjectConfig;
use crate::defaults;
use crate::error::Result;
use crate::options::CreateOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level keys owned by the builder. Custom fields may not use them.
pub const RESERVED_KEYS: &[&str] = &[
    "name",
    "version",
    "description",
    "license",
    "author",
    "homepage",
    "bugs",
    "repository",
    "engines",
    "scripts",
    "dependencies",
    "devDependencies",
];

/// `author` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `bugs` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bugs {
    pub url: String,
}

/// `repository` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Repository {
    pub fn git(url: impl Into<String>) -> Self {
        Self {
            kind: "git".to_string(),
            url: url.into(),
        }
    }
}

/// The generated package.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    pub author: Person,
    pub homepage: String,
    pub bugs: Bugs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub engines: BTreeMap<String, String>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    /// Pass-through fields
    #[serde(flatten)]
    pub custom: BTreeMap<String, Value>,
}

impl Manifest {
    /// Pretty JSON, two-space indent, trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Copy `defaults`, then assign every override on top
pub fn overlay(
    defaults: &[(&str, &str)],
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Builds manifests against a set of organization defaults
pub struct ManifestBuilder<'a> {
    project: &'a ProjectConfig,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(project: &'a ProjectConfig) -> Self {
        Self { project }
    }

    pub fn build(&self, options: &CreateOptions) -> Manifest {
        let homepage = options
            .homepage
            .clone()
            .unwrap_or_else(|| self.default_homepage(&options.name));

        let bugs = Bugs {
            url: options
                .bugs
                .clone()
                .unwrap_or_else(|| format!("{}/issues", homepage.trim_end_matches('/'))),
        };

        let author = match &options.author {
            Some(name) => Person {
                name: name.clone(),
                email: None,
            },
            None => Person {
                name: self.project.author.clone(),
                email: self.project.author_email.clone(),
            },
        };

        let custom = options
            .custom
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Manifest {
            name: options.name.clone(),
            version: options
                .version
                .clone()
                .unwrap_or_else(|| self.project.version.clone()),
            description: options
                .description
                .clone()
                .unwrap_or_else(|| defaults::DESCRIPTION.to_string()),
            license: options
                .license
                .clone()
                .unwrap_or_else(|| self.project.license.clone()),
            author,
            homepage,
            bugs,
            repository: options.repository.as_ref().map(Repository::git),
            engines: overlay(defaults::ENGINES, &options.engines),
            scripts: overlay(defaults::SCRIPTS, &options.scripts),
            dependencies: overlay(defaults::DEPENDENCIES, &options.dependencies),
            dev_dependencies: overlay(defaults::DEV_DEPENDENCIES, &options.dev_dependencies),
            custom,
        }
    }

    fn default_homepage(&self, name: &str) -> String {
        format!("https://github.com/{}/{}", self.project.org, name)
    }
}

/// Build a manifest with the built-in defaults
pub fn build(options: &CreateOptions) -> Manifest {
    let project = ProjectConfig::default();
    ManifestBuilder::new(&project).build(options)
}

/// True if `key` is a field the builder computes itself
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
