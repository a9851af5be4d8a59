//! External programs run inside a new project
//!
//! `git init` and `yarn install` are plain subprocesses. A non-zero exit is an
//! error carrying the program's stderr.

use crate::config::ToolsConfig;
use crate::error::{CreateError, Result};
use std::path::Path;
use std::process::Command;

/// Run `program args...` with `dir` as working directory
pub fn run_in(dir: &Path, program: &str, args: &[String]) -> Result<()> {
    let display = command_line(program, args);

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| CreateError::Spawn {
            command: display.clone(),
            source: e,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CreateError::Command {
            command: display,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Initialize version control in `dir`
pub fn init_vcs(dir: &Path, tools: &ToolsConfig) -> Result<()> {
    run_in(dir, &tools.vcs, &tools.vcs_args)
}

/// Install dependencies in `dir` with the package manager
pub fn install_dependencies(dir: &Path, tools: &ToolsConfig) -> Result<()> {
    run_in(dir, &tools.package_manager, &tools.install_args)
}

/// Human-readable command line for status output and errors
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Check whether `program` can be started at all
pub fn is_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_line() {
        assert_eq!(command_line("git", &args(&["init", "--quiet"])), "git init --quiet");
        assert_eq!(command_line("yarn", &[]), "yarn");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let err = run_in(dir.path(), "seedling-no-such-program", &[]).unwrap_err();
        assert!(matches!(err, CreateError::Spawn { .. }));
        assert!(!is_available("seedling-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_directory() {
        let dir = TempDir::new().unwrap();
        run_in(dir.path(), "sh", &args(&["-c", "touch marker"])).unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_command_error() {
        let dir = TempDir::new().unwrap();
        let err = run_in(dir.path(), "sh", &args(&["-c", "echo broken >&2; exit 3"])).unwrap_err();
        match err {
            CreateError::Command {
                command,
                status,
                stderr,
            } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(status, Some(3));
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_init_vcs_creates_git_dir() {
        if !is_available("git") {
            eprintln!("git not installed, skipping");
            return;
        }
        let dir = TempDir::new().unwrap();
        init_vcs(dir.path(), &ToolsConfig::default()).unwrap();
        assert!(dir.path().join(".git").exists());
    }
}
