//! Test utilities for on-disk barrel fixtures.
//!
//! Tests run against real files in a temporary directory rather than a
//! mocked filesystem, so index selection and extension lookup see the same
//! directory listings they would in a project.

// Fixture setup writes straight to disk
#![allow(clippy::disallowed_methods)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `files` (relative path, contents) under `temp` and return its root.
///
/// Parent directories are created as needed.
///
/// ```rust
/// use tempfile::TempDir;
/// use unbarrel::test_utils::create_test_project;
///
/// let temp = TempDir::new().unwrap();
/// let root = create_test_project(&temp, &[("src/barrel/index.ts", "export const a = 1;")]);
/// assert!(root.join("src/barrel/index.ts").exists());
/// ```
pub fn create_test_project(temp: &TempDir, files: &[(&str, &str)]) -> PathBuf {
    let root = temp.path().to_path_buf();

    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
    }

    root
}

/// Read a fixture file back as a string.
pub fn read_fixture(root: &std::path::Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).expect("failed to read fixture file")
}
