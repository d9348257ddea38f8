//! Shared utilities for command implementations.
//!
//! - Path resolution
//! - Configuration loading with CLI overrides
//! - Source file discovery

use std::path::{Path, PathBuf};

use path_clean::clean;
use tracing::debug;
use unbarrel::{BarrelTransform, ExportGraphResolver, ImportRewriter, NativeFileSystem};
use unbarrel_config::{ConfigDiscovery, UnbarrelConfig};
use walkdir::WalkDir;

use crate::error::{CliError, Result, ResultExt};

/// Current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::from)
}

/// Resolve a path relative to a working directory, lexically cleaned.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        clean(path)
    } else {
        clean(cwd.join(path))
    }
}

/// Configuration plus the directory it is anchored at.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: UnbarrelConfig,
    /// Directory barrel paths are relative to
    pub base: PathBuf,
    /// File the configuration came from, if any
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn barrel_dirs(&self) -> Vec<PathBuf> {
        self.config.barrel_dirs(&self.base)
    }
}

/// Load configuration from `explicit`, or discover it under `cwd`.
///
/// With `required`, a missing config is an error; otherwise defaults are used.
pub fn load_config(explicit: Option<&Path>, cwd: &Path, required: bool) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let path = resolve_path(path, cwd);
        if !path.is_file() {
            return Err(CliError::FileNotFound(path));
        }
        let config = ConfigDiscovery::load_from(&path).with_path(&path)?;
        let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
        return Ok(LoadedConfig {
            config,
            base,
            source: Some(path),
        });
    }

    let discovery = ConfigDiscovery::new(cwd);
    let source = discovery.find();
    let config = if required {
        discovery.load()?
    } else {
        discovery.load_or_default()?
    };
    debug!(source = ?source, "configuration loaded");

    Ok(LoadedConfig {
        config,
        base: cwd.to_path_buf(),
        source,
    })
}

/// Build the transform for a loaded configuration.
pub fn build_transform(loaded: &LoadedConfig) -> BarrelTransform<NativeFileSystem> {
    let rewriter = ImportRewriter::new(
        ExportGraphResolver::new(NativeFileSystem),
        loaded.barrel_dirs(),
        loaded.config.rewrite_options(),
    );
    BarrelTransform::new(rewriter)
}

/// Collect source files under `paths`, sorted and de-duplicated.
///
/// Directories are walked recursively, skipping excluded names. Files named
/// explicitly are taken as long as their extension is included.
pub fn collect_sources(paths: &[PathBuf], cwd: &Path, config: &UnbarrelConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let root = resolve_path(path, cwd);
        if !root.exists() {
            return Err(CliError::FileNotFound(root));
        }

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !config.is_excluded(name))
            });

        for entry in walker {
            let entry = entry.map_err(|e| CliError::Io(e.into()))?;
            if entry.file_type().is_file() && config.includes_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
