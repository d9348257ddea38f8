//! Error handling for the unbarrel CLI.
//!
//! `CliError` wraps the library errors via `#[from]`; [`cli_error_to_miette`]
//! turns it into a report at the top of `main`, keeping the diagnostic codes
//! and help text the core errors carry.

mod report;

use std::path::PathBuf;

use thiserror::Error;
use unbarrel::{ResolveError, RuntimeError, TransformError};
use unbarrel_config::ConfigError;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A barrel directory could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A single consumer file could not be transformed
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Some files failed to transform; each was reported already
    #[error("{failed} of {total} files could not be transformed")]
    TransformFailed { failed: usize, total: usize },

    /// `--check` found files that would be rewritten
    #[error("{count} file(s) import through barrels and would be rewritten")]
    CheckFailed { count: usize },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Filesystem access through the runtime failed
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                CliError::Runtime(RuntimeError::FileNotFound(_)) => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_maps_not_found() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        match result.with_path("src/app.ts") {
            Err(CliError::FileNotFound(path)) => assert_eq!(path, PathBuf::from("src/app.ts")),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_with_path_maps_runtime_not_found_and_keeps_other_errors() {
        let missing: std::result::Result<(), RuntimeError> =
            Err(RuntimeError::FileNotFound(PathBuf::from("/abs/app.ts")));
        assert!(matches!(
            missing.with_path("app.ts"),
            Err(CliError::FileNotFound(path)) if path == PathBuf::from("app.ts")
        ));

        let denied: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(denied.with_path("app.ts"), Err(CliError::Io(_))));
    }

    #[test]
    fn test_check_failure_message() {
        let err = CliError::CheckFailed { count: 2 };
        assert_eq!(
            err.to_string(),
            "2 file(s) import through barrels and would be rewritten"
        );
    }
}
