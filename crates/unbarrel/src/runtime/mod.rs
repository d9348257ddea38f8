//! Filesystem abstraction for barrel resolution.
//!
//! This module defines the `FileSystem` trait that the resolver and the
//! transform host use for every disk access. Hosts that keep sources in
//! memory (editors, bundler plugins) implement the trait themselves; the
//! CLI uses [`NativeFileSystem`].
//!
//! Resolution is synchronous: a barrel is walked to completion without
//! suspension points, so the trait exposes blocking methods only.

pub mod native;

use std::path::{Path, PathBuf};

pub use native::NativeFileSystem;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

impl RuntimeError {
    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RuntimeError::FileNotFound(_))
    }
}

/// File metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// Whether this is a directory
    pub is_dir: bool,
    /// Whether this is a file
    pub is_file: bool,
}

/// Filesystem capability consumed by the resolver and the transform host.
///
/// Implementations must be shareable across threads: the CLI transforms
/// files in parallel against a single resolver.
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Read a UTF-8 file into a string
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String>;

    /// Write a file, replacing its contents
    fn write_file(&self, path: &Path, contents: &str) -> RuntimeResult<()>;

    /// Get file metadata without following the path through index resolution
    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// List entry names of a directory, in the order the platform returns them
    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// Get the current working directory
    fn get_cwd(&self) -> RuntimeResult<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        (**self).read_to_string(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> RuntimeResult<()> {
        (**self).write_file(path, contents)
    }

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        (**self).metadata(path)
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        (**self).read_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn get_cwd(&self) -> RuntimeResult<PathBuf> {
        (**self).get_cwd()
    }
}
