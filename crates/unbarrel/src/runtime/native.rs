//! Native filesystem implementation backed by `std::fs`.

// NativeFileSystem is the one place allowed to touch std::fs
#![allow(clippy::disallowed_methods)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{FileMetadata, FileSystem, RuntimeError, RuntimeResult};

/// `FileSystem` implementation over the operating system filesystem.
///
/// # Example
///
/// ```rust,no_run
/// use unbarrel::runtime::{FileSystem, NativeFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// let source = fs.read_to_string(Path::new("src/index.ts")).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new NativeFileSystem instance.
    pub fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, action: &str, error: std::io::Error) -> RuntimeError {
    if error.kind() == ErrorKind::NotFound {
        RuntimeError::FileNotFound(path.to_path_buf())
    } else {
        RuntimeError::Io(format!("Failed to {} {}: {}", action, path.display(), error))
    }
}

impl FileSystem for NativeFileSystem {
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, "read", e))
    }

    fn write_file(&self, path: &Path, contents: &str) -> RuntimeResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, "write", e))
    }

    /// Uses `symlink_metadata` so a symlinked index file is seen as the
    /// link itself, matching `lstat` semantics.
    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let metadata = std::fs::symlink_metadata(path)
            .map_err(|e| map_io_error(path, "get metadata for", e))?;

        // Follow symlinks for the kind check only
        let (is_dir, is_file) = if metadata.file_type().is_symlink() {
            match std::fs::metadata(path) {
                Ok(target) => (target.is_dir(), target.is_file()),
                Err(_) => (false, false),
            }
        } else {
            (metadata.is_dir(), metadata.is_file())
        };

        Ok(FileMetadata {
            is_dir,
            is_file,
        })
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, "read directory", e))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| RuntimeError::Io(format!("Failed to read directory entry: {}", e)))?;

            if let Some(name) = entry.file_name().to_str() {
                result.push(name.to_string());
            }
        }

        Ok(result)
    }

    fn get_cwd(&self) -> RuntimeResult<PathBuf> {
        std::env::current_dir().map_err(|e| {
            RuntimeError::Io(format!("Failed to get current working directory: {}", e))
        })
    }
}
