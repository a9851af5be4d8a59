//! `create` command handler
//!
//! Builds the manifest, then hands off to the [`Scaffolder`]. Errors come back
//! exactly as the scaffolder produced them.

use crate::config::Config;
use crate::error::{CreateError, Result};
use crate::gitignore::{HttpFetcher, TemplateFetcher};
use crate::manifest::ManifestBuilder;
use crate::options::CreateOptions;
use crate::scaffold::Scaffolder;
use std::path::{Path, PathBuf};

/// Create the project described by `options` in the current directory
pub fn handle(options: &CreateOptions, config: &Config, quiet: bool) -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| CreateError::io("Could not get current directory", e))?;
    handle_with(options, config, &cwd, &HttpFetcher, quiet)
}

/// Same as [`handle`] with an explicit base directory and template source
pub fn handle_with(
    options: &CreateOptions,
    config: &Config,
    base_dir: &Path,
    fetcher: &dyn TemplateFetcher,
    quiet: bool,
) -> Result<PathBuf> {
    let manifest = ManifestBuilder::new(&config.project).build(options);
    Scaffolder::new(base_dir, config, fetcher)
        .quiet(quiet)
        .create_project(&options.name, &manifest, options.install)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitignore::StaticFetcher;
    #[cfg(unix)]
    use crate::manifest::Manifest;
    #[cfg(unix)]
    use serde_json::{json, Value};
    use tempfile::TempDir;

    const NAME: &str = "test-directory";

    #[cfg(unix)]
    fn config() -> Config {
        let mut config = Config::default();
        config.tools.vcs = "sh".to_string();
        config.tools.vcs_args = vec!["-c".to_string(), "mkdir .git".to_string()];
        config.tools.package_manager = "sh".to_string();
        config.tools.install_args = vec!["-c".to_string(), "touch yarn.lock".to_string()];
        config
    }

    #[cfg(unix)]
    fn handle_in(dir: &TempDir, options: &CreateOptions) -> Result<PathBuf> {
        let fetcher = StaticFetcher("node_modules/\n".to_string());
        handle_with(options, &config(), dir.path(), &fetcher, true)
    }

    #[cfg(unix)]
    fn read_pkg(dir: &TempDir) -> Value {
        let raw = std::fs::read_to_string(dir.path().join(NAME).join("package.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_existing_target_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        let fetcher = StaticFetcher(String::new());

        let err = handle_with(
            &CreateOptions::new("src"),
            &Config::default(),
            dir.path(),
            &fetcher,
            true,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "File already exists with that name");
    }

    #[cfg(unix)]
    #[test]
    fn test_creates_project_files() {
        let dir = TempDir::new().unwrap();
        let target = handle_in(&dir, &CreateOptions::new(NAME)).unwrap();

        assert!(target.join("package.json").exists());
        assert!(target.join(".git").exists());
        assert!(target.join(".gitignore").exists());
        assert!(!target.join("yarn.lock").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_install_creates_lockfile() {
        let dir = TempDir::new().unwrap();
        let target = handle_in(&dir, &CreateOptions::new(NAME).with_install(true)).unwrap();
        assert!(target.join("yarn.lock").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_package_json() {
        let dir = TempDir::new().unwrap();
        let mut options = CreateOptions::new(NAME)
            .with_dependency("@pi-cubed/typed-ui", "latest")
            .with_engine("python", ">=3.5.0")
            .with_field("test", "test");
        options.author = Some("test".to_string());
        options.bugs = Some("https://test.com".to_string());
        options.repository = Some("test".to_string());
        handle_in(&dir, &options).unwrap();

        let pkg = read_pkg(&dir);
        assert_eq!(pkg["name"], json!(NAME));
        assert_eq!(pkg["version"], json!("0.1.0"));
        assert_eq!(pkg["license"], json!("MIT"));
        assert_eq!(pkg["author"], json!({ "name": "test" }));
        assert_eq!(pkg["homepage"], json!("https://github.com/pi-cubed/test-directory"));
        assert_eq!(pkg["bugs"], json!({ "url": "https://test.com" }));
        assert_eq!(pkg["repository"], json!({ "type": "git", "url": "test" }));
        assert_eq!(pkg["engines"], json!({ "node": ">=8.0.0", "python": ">=3.5.0" }));
        assert_eq!(pkg["dependencies"]["@pi-cubed/typed-ui"], json!("latest"));
        assert_eq!(pkg["test"], json!("test"));
        for artifact in ["$0", "_", "h"] {
            assert!(pkg.get(artifact).is_none());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_uses_project_config() {
        let dir = TempDir::new().unwrap();
        let mut config = config();
        config.project.org = "acme".to_string();
        let fetcher = StaticFetcher(String::new());

        let target =
            handle_with(&CreateOptions::new(NAME), &config, dir.path(), &fetcher, true).unwrap();
        let raw = std::fs::read_to_string(target.join("package.json")).unwrap();
        let manifest = Manifest::from_json(&raw).unwrap();
        assert_eq!(manifest.homepage, "https://github.com/acme/test-directory");
        assert_eq!(manifest.bugs.url, "https://github.com/acme/test-directory/issues");
    }
}
