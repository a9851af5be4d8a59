//! Error type for project creation
//!
//! Every step of `seedling create` reports failures through [`CreateError`].
//! Nothing is retried and nothing is cleaned up; the caller decides what to
//! do with a half-built directory.

use std::path::PathBuf;

/// Error type for scaffolding operations
#[derive(Debug)]
pub enum CreateError {
    /// Something already lives at the target path
    AlreadyExists { path: PathBuf },
    /// Bad command-line input (missing name, malformed KEY=VALUE, ...)
    Parse { message: String },
    /// Filesystem failure while creating or writing
    Io { context: String, source: std::io::Error },
    /// A subprocess could not be started at all
    Spawn { command: String, source: std::io::Error },
    /// A subprocess ran and exited non-zero
    Command { command: String, status: Option<i32>, stderr: String },
    /// Fetching the .gitignore template failed
    Network { url: String, message: String },
    /// The manifest could not be serialized
    Serialize(serde_json::Error),
    /// A config file was found but could not be used
    Config { path: PathBuf, message: String },
}

impl CreateError {
    pub fn parse(message: impl Into<String>) -> Self {
        CreateError::Parse {
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CreateError::Io {
            context: context.into(),
            source,
        }
    }

    /// True for the "target already exists" precondition failure
    pub fn is_already_exists(&self) -> bool {
        matches!(self, CreateError::AlreadyExists { .. })
    }
}

impl std::fmt::Display for CreateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateError::AlreadyExists { .. } => write!(f, "File already exists with that name"),
            CreateError::Parse { message } => write!(f, "{}", message),
            CreateError::Io { context, source } => write!(f, "{}: {}", context, source),
            CreateError::Spawn { command, source } => {
                write!(f, "Could not run '{}': {}", command, source)
            }
            CreateError::Command {
                command,
                status,
                stderr,
            } => {
                let code = status
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                if stderr.trim().is_empty() {
                    write!(f, "Command '{}' failed (exit {})", command, code)
                } else {
                    write!(f, "Command '{}' failed (exit {}): {}", command, code, stderr.trim())
                }
            }
            CreateError::Network { url, message } => {
                write!(f, "Could not fetch {}: {}", url, message)
            }
            CreateError::Serialize(e) => write!(f, "Could not serialize package.json: {}", e),
            CreateError::Config { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CreateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CreateError::Io { source, .. } | CreateError::Spawn { source, .. } => Some(source),
            CreateError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CreateError {
    fn from(e: serde_json::Error) -> Self {
        CreateError::Serialize(e)
    }
}

pub type Result<T> = std::result::Result<T, CreateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_message() {
        let err = CreateError::AlreadyExists {
            path: PathBuf::from("src"),
        };
        assert_eq!(err.to_string(), "File already exists with that name");
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_parse_message_is_verbatim() {
        let err = CreateError::parse("Not enough non-option arguments: got 0, need at least 1");
        assert_eq!(
            err.to_string(),
            "Not enough non-option arguments: got 0, need at least 1"
        );
        assert!(!err.is_already_exists());
    }

    #[test]
    fn test_command_message_includes_stderr() {
        let err = CreateError::Command {
            command: "git init".to_string(),
            status: Some(128),
            stderr: "fatal: nope\n".to_string(),
        };
        assert_eq!(err.to_string(), "Command 'git init' failed (exit 128): fatal: nope");
    }
}
