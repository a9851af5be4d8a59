//! Built-in defaults for generated projects
//!
//! Plain static tables. Configuration can change the organization and
//! author, never these maps.

/// Name of the manifest written into every new project
pub const MANIFEST_FILE: &str = "package.json";

/// Name of the ignore file written into every new project
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Lockfile the package manager is expected to leave behind
pub const LOCKFILE: &str = "yarn.lock";

pub const VERSION: &str = "0.1.0";
pub const LICENSE: &str = "MIT";
pub const DESCRIPTION: &str = "";
pub const AUTHOR: &str = "Pi Cubed";
pub const ORG: &str = "pi-cubed";

/// Runtime the engine constraint applies to
pub const ENGINE: &str = "node";
pub const ENGINE_RANGE: &str = ">=8.0.0";

/// Upstream Node template from github/gitignore
pub const GITIGNORE_URL: &str =
    "https://raw.githubusercontent.com/github/gitignore/master/Node.gitignore";

pub const VCS: &str = "git";
pub const VCS_ARGS: &[&str] = &["init", "--quiet"];
pub const PACKAGE_MANAGER: &str = "yarn";
pub const INSTALL_ARGS: &[&str] = &["install"];

pub const DEPENDENCIES: &[(&str, &str)] = &[];

pub const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("ava", "^0.25.0"),
    ("babel-cli", "^6.26.0"),
    ("babel-preset-env", "^1.6.1"),
    ("babel-register", "^6.26.0"),
    ("eslint", "^4.19.1"),
    ("prettier", "^1.12.1"),
];

pub const SCRIPTS: &[(&str, &str)] = &[
    ("build", "babel src -d lib"),
    ("format", "prettier --write 'src/**/*.js' 'test/**/*.js'"),
    ("lint", "eslint src test"),
    ("prepublishOnly", "yarn build"),
    ("test", "ava"),
];

pub const ENGINES: &[(&str, &str)] = &[(ENGINE, ENGINE_RANGE)];
