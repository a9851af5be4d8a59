//! Command-line surface
//!
//! clap parses into [`Cli`]; [`CreateArgs::into_options`] then copies each
//! field into a fresh [`CreateOptions`].

use crate::error::{CreateError, Result};
use crate::manifest;
use crate::options::{parse_field_value, parse_key_value, CreateOptions};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;

/// Message for a `create` without a project name
pub const MISSING_NAME: &str = "Not enough non-option arguments: got 0, need at least 1";

#[derive(Parser, Debug)]
#[command(name = "seedling")]
#[command(author, version, about = "Scaffold a new JavaScript package: directory, package.json, git and .gitignore")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project directory
    Create(CreateArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CreateArgs {
    /// Directory to create, also used as the package name
    pub name: Option<String>,

    /// Install dependencies after scaffolding
    #[arg(short, long)]
    pub install: bool,

    /// Package version (default: 0.1.0)
    #[arg(long)]
    pub version: Option<String>,

    /// License identifier (default: MIT)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Homepage URL (default: https://github.com/<org>/<name>)
    #[arg(long)]
    pub homepage: Option<String>,

    /// Issue tracker URL (default: <homepage>/issues)
    #[arg(long)]
    pub bugs: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Git repository URL
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Extra dependency, repeatable
    #[arg(short = 'd', long = "dependency", value_name = "NAME=RANGE")]
    pub dependencies: Vec<String>,

    /// Extra dev dependency, repeatable
    #[arg(short = 'D', long = "dev-dependency", value_name = "NAME=RANGE")]
    pub dev_dependencies: Vec<String>,

    /// Extra or replacement script, repeatable
    #[arg(short, long = "script", value_name = "NAME=COMMAND")]
    pub scripts: Vec<String>,

    /// Extra or replacement engine constraint, repeatable
    #[arg(short, long = "engine", value_name = "NAME=RANGE")]
    pub engines: Vec<String>,

    /// Custom top-level package.json field (JSON values are kept typed), repeatable
    #[arg(short, long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Print the package.json that would be written and stop
    #[arg(long)]
    pub dry_run: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CreateArgs {
    /// Copy the parsed arguments into invocation options
    pub fn into_options(self) -> Result<CreateOptions> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(CreateError::parse(MISSING_NAME)),
        };

        let custom = self
            .fields
            .iter()
            .map(|raw| parse_key_value(raw).map(|(key, value)| (key, parse_field_value(&value))))
            .collect::<std::result::Result<BTreeMap<_, _>, String>>()
            .map_err(CreateError::parse)?;

        Ok(CreateOptions {
            name,
            install: self.install,
            dependencies: pairs(&self.dependencies)?,
            dev_dependencies: pairs(&self.dev_dependencies)?,
            scripts: pairs(&self.scripts)?,
            engines: pairs(&self.engines)?,
            version: self.version,
            license: self.license,
            author: self.author,
            homepage: self.homepage,
            bugs: self.bugs,
            description: self.description,
            repository: self.repository,
            custom,
        })
    }
}

fn pairs(raw: &[String]) -> Result<BTreeMap<String, String>> {
    raw.iter()
        .map(String::as_str)
        .map(parse_key_value)
        .collect::<std::result::Result<BTreeMap<_, _>, String>>()
        .map_err(CreateError::parse)
}

/// Parse `seedling create <args>` into options without running anything
pub fn parse_create<I, T>(args: I) -> Result<CreateOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let argv = ["seedling".to_string(), "create".to_string()]
        .into_iter()
        .chain(args.into_iter().map(Into::into));

    let cli = Cli::try_parse_from(argv).map_err(|e| CreateError::parse(e.to_string()))?;
    match cli.command {
        Command::Create(args) => args.into_options(),
        Command::Completion { .. } => Err(CreateError::parse("Expected the create command")),
    }
}

/// Custom fields that will be dropped because the builder owns those keys
pub fn shadowed_fields(options: &CreateOptions) -> Vec<&str> {
    options
        .custom
        .keys()
        .map(String::as_str)
        .filter(|key| manifest::is_reserved(key))
        .collect()
}
