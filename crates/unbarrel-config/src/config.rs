//! Configuration structure for unbarrel.
//!
//! TOML files use snake_case keys; the `package.json` field may use the
//! camelCase spellings instead.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use unbarrel::paths::SOURCE_EXTENSIONS;
use unbarrel::{RewriteOptions, SpecifierStyle};

use crate::error::{ConfigError, Result as ConfigResult};

/// Directory names never descended into when collecting sources.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", "dist", "build"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnbarrelConfig {
    /// Barrel directories whose imports are rewritten, relative to `root`
    #[serde(alias = "barrelFiles")]
    pub barrels: Vec<PathBuf>,

    /// Project root; defaults to the directory holding the config file
    pub root: Option<PathBuf>,

    /// How rewritten import sources are printed
    #[serde(alias = "specifierStyle")]
    pub specifier_style: SpecifierStyle,

    /// Extensions of consumer files to transform
    #[serde(alias = "includeExtensions")]
    pub include_extensions: Vec<String>,

    /// File or directory names skipped when collecting sources
    pub exclude: Vec<String>,
}

impl Default for UnbarrelConfig {
    fn default() -> Self {
        Self {
            barrels: Vec::new(),
            root: None,
            specifier_style: SpecifierStyle::default(),
            include_extensions: SOURCE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

impl UnbarrelConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use unbarrel_config::UnbarrelConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let config = UnbarrelConfig::from_value(json!({
    ///     "barrels": ["src/components"],
    ///     "specifierStyle": "absolute"
    /// }))
    /// .unwrap();
    /// assert_eq!(config.barrels, vec![PathBuf::from("src/components")]);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Project root, anchored at `base` (the config file's directory).
    pub fn project_root(&self, base: &Path) -> PathBuf {
        match &self.root {
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        }
    }

    /// Barrel directories as paths under the project root.
    pub fn barrel_dirs(&self, base: &Path) -> Vec<PathBuf> {
        let root = self.project_root(base);
        self.barrels.iter().map(|barrel| root.join(barrel)).collect()
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            specifier_style: self.specifier_style,
        }
    }

    /// Whether a file with this path should be transformed.
    pub fn includes_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.include_extensions.iter().any(|known| known == ext))
    }

    /// Whether a file or directory name is excluded from source collection.
    pub fn is_excluded(&self, name: &str) -> bool {
        DEFAULT_EXCLUDES.contains(&name) || self.exclude.iter().any(|excluded| excluded == name)
    }
}
