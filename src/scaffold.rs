//! Directory bootstrap for `seedling create`
//!
//! Creates the project directory and fills it, one step at a time:
//!
//! 1. create `<name>/` (must not exist yet)
//! 2. write `package.json`
//! 3. initialize git
//! 4. write `.gitignore` from the template source
//! 5. optionally run the package manager
//!
//! The first failure stops the sequence. Whatever was created stays on disk.

use crate::config::Config;
use crate::defaults;
use crate::error::{CreateError, Result};
use crate::gitignore::TemplateFetcher;
use crate::manifest::Manifest;
use crate::toolchain;
use colored::Colorize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Creates projects under a base directory
pub struct Scaffolder<'a> {
    base_dir: PathBuf,
    config: &'a Config,
    fetcher: &'a dyn TemplateFetcher,
    quiet: bool,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        base_dir: impl Into<PathBuf>,
        config: &'a Config,
        fetcher: &'a dyn TemplateFetcher,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
            fetcher,
            quiet: false,
        }
    }

    /// Suppress status lines
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Where a project called `name` would be created
    pub fn target(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Create `<base>/<name>` and populate it. Returns the project path.
    pub fn create_project(&self, name: &str, manifest: &Manifest, install: bool) -> Result<PathBuf> {
        let target = self.target(name);

        // symlink_metadata so a dangling link also counts as taken
        if fs::symlink_metadata(&target).is_ok() {
            return Err(CreateError::AlreadyExists { path: target });
        }

        self.headline(&target);

        // 1. Directory
        create_dir(&target)?;
        self.status("Creating", &format!("{}/", name));

        // 2. package.json
        let json = manifest.to_json()?;
        write_file(&target.join(defaults::MANIFEST_FILE), &json, defaults::MANIFEST_FILE)?;
        self.status("Creating", defaults::MANIFEST_FILE);

        // 3. Version control
        let tools = &self.config.tools;
        self.status("Running", &toolchain::command_line(&tools.vcs, &tools.vcs_args));
        toolchain::init_vcs(&target, tools)?;

        // 4. .gitignore
        let template = self.fetcher.fetch(&self.config.gitignore.url)?;
        write_file(&target.join(defaults::GITIGNORE_FILE), &template, defaults::GITIGNORE_FILE)?;
        self.status("Creating", defaults::GITIGNORE_FILE);

        // 5. Dependencies
        if install {
            self.status(
                "Running",
                &toolchain::command_line(&tools.package_manager, &tools.install_args),
            );
            toolchain::install_dependencies(&target, tools)?;

            if !target.join(&tools.lockfile).exists() && !self.quiet {
                println!(
                    "   {} {} was not created by {}",
                    "Warning".yellow(),
                    tools.lockfile,
                    tools.package_manager
                );
            }
        }

        self.footer(name, install);

        Ok(target)
    }

    fn headline(&self, target: &Path) {
        if self.quiet {
            return;
        }
        println!("\n{}", "Creating project...".cyan().bold());
        println!("   Directory: {}\n", target.display());
    }

    fn status(&self, verb: &str, what: &str) {
        if !self.quiet {
            println!("   {} {}", verb.green(), what);
        }
    }

    fn footer(&self, name: &str, install: bool) {
        if self.quiet {
            return;
        }
        println!("\n{}", "Project created!".green().bold());
        println!("\nNext steps:");
        println!("  1. {}", format!("cd {}", name).cyan());
        if install {
            println!("  2. Run {} to run the tests", "yarn test".cyan());
        } else {
            println!("  2. Run {} to install dependencies", "yarn".cyan());
        }
        println!();
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            CreateError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            CreateError::io(format!("Could not create {}", path.display()), e)
        }
    })
}

fn write_file(path: &Path, content: &str, display_name: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| CreateError::io(format!("Could not write {}", display_name), e))
}
