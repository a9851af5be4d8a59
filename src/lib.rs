//! Seedling - scaffold a new JavaScript package in one command
//!
//! `seedling create my-lib` creates `my-lib/`, writes a `package.json` built
//! from defaults plus your overrides, runs `git init`, drops in the standard
//! Node `.gitignore`, and with `--install` runs `yarn install`.
//!
//! # Quick Start
//!
//! ```no_run
//! use seedling::{build, handle, Config, CreateOptions};
//!
//! let options = CreateOptions::new("my-lib").with_dependency("react", "^16.4.0");
//!
//! // Inspect the manifest without touching the filesystem
//! let manifest = build(&options);
//! assert_eq!(manifest.version, "0.1.0");
//!
//! // Create the project in the current directory
//! let path = handle(&options, &Config::load().unwrap(), false).unwrap();
//! println!("Created {}", path.display());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod gitignore;
pub mod manifest;
pub mod options;
pub mod scaffold;
pub mod toolchain;

pub use commands::{handle, handle_with};
pub use config::Config;
pub use error::{CreateError, Result};
pub use gitignore::{HttpFetcher, StaticFetcher, TemplateFetcher};
pub use manifest::{build, Bugs, Manifest, ManifestBuilder, Person, Repository};
pub use options::CreateOptions;
pub use scaffold::Scaffolder;
