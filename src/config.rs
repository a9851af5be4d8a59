//! Configuration file support for seedling
//!
//! Reads from `$SEEDLING_CONFIG`, or the nearest `.seedling/config.toml`

use crate::defaults;
use crate::error::{CreateError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var pointing at an explicit config file
pub const CONFIG_ENV: &str = "SEEDLING_CONFIG";

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Manifest defaults that vary per organization
    #[serde(default)]
    pub project: ProjectConfig,

    /// Where the .gitignore template comes from
    #[serde(default)]
    pub gitignore: GitignoreConfig,

    /// External programs run inside the new project
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Organization-level manifest defaults
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    /// GitHub organization used for homepage and bugs URLs
    /// Default: "pi-cubed"
    #[serde(default = "default_org")]
    pub org: String,

    /// Author name when none is given
    /// Default: "Pi Cubed"
    #[serde(default = "default_author")]
    pub author: String,

    /// Optional author email added to the default author
    #[serde(default)]
    pub author_email: Option<String>,

    #[serde(default = "default_license")]
    pub license: String,

    #[serde(default = "default_version")]
    pub version: String,
}

/// Template source for .gitignore
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitignoreConfig {
    /// http(s) URL, or a local file path
    #[serde(default = "default_gitignore_url")]
    pub url: String,
}

/// Programs used for VCS init and dependency installation
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_vcs")]
    pub vcs: String,

    #[serde(default = "default_vcs_args")]
    pub vcs_args: Vec<String>,

    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,

    /// File the package manager is expected to produce
    #[serde(default = "default_lockfile")]
    pub lockfile: String,
}

fn default_org() -> String {
    defaults::ORG.to_string()
}

fn default_author() -> String {
    defaults::AUTHOR.to_string()
}

fn default_license() -> String {
    defaults::LICENSE.to_string()
}

fn default_version() -> String {
    defaults::VERSION.to_string()
}

fn default_gitignore_url() -> String {
    defaults::GITIGNORE_URL.to_string()
}

fn default_vcs() -> String {
    defaults::VCS.to_string()
}

fn default_vcs_args() -> Vec<String> {
    defaults::VCS_ARGS.iter().map(|s| s.to_string()).collect()
}

fn default_package_manager() -> String {
    defaults::PACKAGE_MANAGER.to_string()
}

fn default_install_args() -> Vec<String> {
    defaults::INSTALL_ARGS.iter().map(|s| s.to_string()).collect()
}

fn default_lockfile() -> String {
    defaults::LOCKFILE.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            org: default_org(),
            author: default_author(),
            author_email: None,
            license: default_license(),
            version: default_version(),
        }
    }
}

impl Default for GitignoreConfig {
    fn default() -> Self {
        Self {
            url: default_gitignore_url(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            vcs: default_vcs(),
            vcs_args: default_vcs_args(),
            package_manager: default_package_manager(),
            install_args: default_install_args(),
            lockfile: default_lockfile(),
        }
    }
}

impl Config {
    /// Load config from `$SEEDLING_CONFIG` or the nearest `.seedling/config.toml`
    /// Returns default config if there is no file; a broken file is an error
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CreateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| CreateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Find config.toml: env var first, then walk up the directory tree
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        let current_dir = std::env::current_dir().ok()?;
        let mut dir = current_dir.as_path();

        loop {
            let config_path = dir.join(".seedling").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.org, "pi-cubed");
        assert_eq!(config.project.author, "Pi Cubed");
        assert_eq!(config.project.license, "MIT");
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.tools.vcs, "git");
        assert_eq!(config.tools.package_manager, "yarn");
        assert_eq!(config.tools.install_args, vec!["install".to_string()]);
        assert_eq!(config.tools.lockfile, "yarn.lock");
        assert!(config.gitignore.url.ends_with("Node.gitignore"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[project]
org = "acme"
author_email = "dev@acme.io"

[tools]
package_manager = "npm"
lockfile = "package-lock.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.project.org, "acme");
        assert_eq!(config.project.author, "Pi Cubed");
        assert_eq!(config.project.author_email.as_deref(), Some("dev@acme.io"));
        assert_eq!(config.tools.package_manager, "npm");
        assert_eq!(config.tools.install_args, vec!["install".to_string()]);
        assert_eq!(config.tools.vcs, "git");
        assert_eq!(config.gitignore, GitignoreConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[project\norg = ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, CreateError::Config { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CreateError::Config { .. }));
    }
}
