//! File-based config discovery for CLI use
//!
//! Handles finding and loading unbarrel configuration files from the filesystem.

// Config files are read before any `FileSystem` exists
#![allow(clippy::disallowed_methods)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::UnbarrelConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file.
pub const CONFIG_FILE_NAME: &str = "unbarrel.toml";

/// Field of `package.json` holding the config.
pub const PACKAGE_JSON_FIELD: &str = "unbarrel";

/// File-based configuration discovery
///
/// This is primarily for CLI use - library users should use
/// `UnbarrelConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use unbarrel_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: unbarrel.toml
    /// 2. package.json (unbarrel field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<UnbarrelConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        Self::load_from(&path)
    }

    /// Load config from the discovered file, or defaults when there is none.
    pub fn load_or_default(&self) -> Result<UnbarrelConfig> {
        match self.load() {
            Err(ConfigError::NotFound) => Ok(UnbarrelConfig::default()),
            other => other,
        }
    }

    /// Load config from a specific file path (`*.toml` or `package.json`)
    pub fn load_from(path: &Path) -> Result<UnbarrelConfig> {
        debug!(path = %path.display(), "loading config");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return Self::load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        UnbarrelConfig::from_value(value)
    }

    fn load_from_package_json(path: &Path) -> Result<UnbarrelConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let value = parsed
            .get(PACKAGE_JSON_FIELD)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add an 'unbarrel' field to your package.json".to_string()),
            })?;

        if value.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'unbarrel' field cannot be null".to_string()),
            });
        }

        UnbarrelConfig::from_value(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
        assert!(matches!(discovery.load().unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_or_default_without_config() {
        let dir = TempDir::new().unwrap();
        let config = ConfigDiscovery::new(dir.path()).load_or_default().unwrap();
        assert_eq!(config, UnbarrelConfig::default());
    }

    #[test]
    fn load_reads_config_under_the_given_root() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "barrels = [\"src/ui\"]\n").unwrap();

        let discovery = ConfigDiscovery::new(&nested);
        assert_eq!(discovery.root(), nested.as_path());
        assert_eq!(discovery.find(), Some(nested.join(CONFIG_FILE_NAME)));
        assert_eq!(discovery.load().unwrap().barrels, vec![std::path::PathBuf::from("src/ui")]);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "barrels = [").unwrap();

        let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "toml"));
    }
}
