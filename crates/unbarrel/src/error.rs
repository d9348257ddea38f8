//! Error types for barrel resolution, import rewriting and file transforms.
//!
//! Fatal conditions are errors; recoverable ones (unknown names, skipped
//! declarations) are [`crate::Diagnostic`] values returned next to results.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::runtime::RuntimeError;

/// The concrete file behind a barrel reference could not be produced.
///
/// Fatal for the barrel being resolved: no partial export map is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// Neither the path nor any `<path>.<ext>` sibling exists
    #[error("cannot resolve '{}': no such file, directory or extension match", path.display())]
    #[diagnostic(code(unbarrel::resolve::not_found))]
    NotFound { path: PathBuf },

    /// A directory was referenced but holds no index file
    #[error("directory '{}' has no index file", dir.display())]
    #[diagnostic(
        code(unbarrel::resolve::no_index),
        help("add an index.ts/index.js file that re-exports the directory's public surface")
    )]
    NoIndexFile { dir: PathBuf },

    /// The resolved file exists but could not be read
    #[error("failed to read '{}': {source}", path.display())]
    #[diagnostic(code(unbarrel::resolve::read))]
    Read {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// The resolved file is not valid JavaScript/TypeScript
    #[error("failed to parse '{}': {message}", path.display())]
    #[diagnostic(code(unbarrel::resolve::parse))]
    Parse { path: PathBuf, message: String },
}

impl ResolveError {
    /// Create a parse error from multiple parser messages.
    pub fn parse_error(path: impl Into<PathBuf>, messages: &[String]) -> Self {
        Self::Parse {
            path: path.into(),
            message: messages.join("; "),
        }
    }
}

/// Errors raised while rewriting a single import statement.
#[derive(Debug, Error, Diagnostic)]
pub enum RewriteError {
    /// A default or namespace import targets a configured barrel
    #[error(
        "unsupported import of barrel '{source_specifier}' in '{}': {kinds} imports cannot be mapped to a single file",
        importer.display()
    )]
    #[diagnostic(
        code(unbarrel::rewrite::unsupported_import_shape),
        help("import the needed names explicitly: import {{ A, B }} from '{source_specifier}'")
    )]
    UnsupportedImportShape {
        source_specifier: String,
        importer: PathBuf,
        kinds: String,
    },

    /// The barrel behind the import could not be resolved
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolution(#[from] ResolveError),
}

/// Errors raised while transforming a whole source file.
#[derive(Debug, Error, Diagnostic)]
pub enum TransformError {
    /// The consumer file could not be read
    #[error("failed to read '{}': {source}", path.display())]
    #[diagnostic(code(unbarrel::transform::read))]
    Read {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// The consumer file is not valid JavaScript/TypeScript
    #[error("failed to parse '{}': {message}", path.display())]
    #[diagnostic(code(unbarrel::transform::parse))]
    Parse { path: PathBuf, message: String },

    /// An import statement could not be rewritten
    #[error(transparent)]
    #[diagnostic(transparent)]
    Rewrite(#[from] RewriteError),
}
