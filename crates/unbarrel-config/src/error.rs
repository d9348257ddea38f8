//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {}", h)).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("no barrel directories specified")]
    NoBarrels,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("barrel directory not found: {}", path.display())]
    BarrelNotFound { path: PathBuf },

    #[error("barrel path is not a directory: {}", path.display())]
    BarrelNotDirectory { path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint for the user, when there is one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound => {
                Some("create an unbarrel.toml with `barrels = [\"src/components\"]` or pass --barrel")
            }
            ConfigError::NoBarrels => Some("list at least one directory under `barrels`"),
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::BarrelNotFound { .. } | ConfigError::BarrelNotDirectory { .. } => {
                Some("barrel paths are relative to the project root")
            }
            ConfigError::Io(_) => None,
        }
    }
}
