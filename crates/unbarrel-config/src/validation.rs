//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for
//! hosts that keep sources in memory).

use std::path::{Path, PathBuf};

use unbarrel::paths::SOURCE_EXTENSIONS;

use crate::config::UnbarrelConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &UnbarrelConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use unbarrel_config::{ConfigValidator, SchemaValidator, UnbarrelConfig};
///
/// let config = UnbarrelConfig {
///     barrels: vec!["src/components".into()],
///     ..Default::default()
/// };
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &UnbarrelConfig) -> Result<()> {
        if config.barrels.is_empty() {
            return Err(ConfigError::NoBarrels);
        }

        for barrel in &config.barrels {
            if barrel.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "barrel paths cannot be empty".to_string(),
                    hint: Some("Remove empty strings from the 'barrels' array".to_string()),
                });
            }

            // Absolute barrels are allowed only inside an absolute root
            if barrel.is_absolute() {
                let inside_root = config
                    .root
                    .as_deref()
                    .is_some_and(|root| root.is_absolute() && barrel.starts_with(root));
                if !inside_root {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("barrel '{}' is outside the project root", barrel.display()),
                        hint: Some("Use a path relative to the project root".to_string()),
                    });
                }
            }
        }

        if config.include_extensions.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "include_extensions cannot be empty".to_string(),
                hint: Some(format!("Known extensions: {}", SOURCE_EXTENSIONS.join(", "))),
            });
        }

        for ext in &config.include_extensions {
            if !SOURCE_EXTENSIONS.contains(&ext.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("unknown source extension '{}'", ext),
                    hint: Some(format!(
                        "Use extensions without a leading dot, one of: {}",
                        SOURCE_EXTENSIONS.join(", ")
                    )),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that every barrel is an existing
/// directory under the project root.
pub struct FsValidator {
    base: PathBuf,
}

impl FsValidator {
    /// `base` is the directory the config was loaded from.
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &UnbarrelConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for path in config.barrel_dirs(&self.base) {
            if !path.exists() {
                return Err(ConfigError::BarrelNotFound { path });
            }
            if !path.is_dir() {
                return Err(ConfigError::BarrelNotDirectory { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &UnbarrelConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &UnbarrelConfig, base: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(base).validate(config)
}
