//! # unbarrel
//!
//! Barrel-export resolution and direct-import rewriting for JavaScript and
//! TypeScript.
//!
//! A *barrel* is a directory whose public surface is an index file that
//! re-exports names from sibling files and subdirectories. Importing through
//! a barrel makes bundlers and test runners load every module it re-exports.
//! This crate resolves where each name is really defined and rewrites
//!
//! ```text
//! import { Button, Baz } from './components';
//! ```
//!
//! into
//!
//! ```text
//! import { Button } from './components/button';
//! import { Bar as Baz } from './components/impl';
//! ```
//!
//! ## Architecture
//!
//! ```text
//! BarrelTransform        (parse consumer file, splice replacements)
//!        │
//!        ▼
//! ImportRewriter         (one import statement → direct imports)
//!        │
//!        ▼
//! ExportGraphResolver    (walk re-export chains, flatten the export map)
//!        │          └──► ExportGraphCache (memoized per directory)
//!        ▼
//! parser + paths         (OXC declaration view, index/extension lookup)
//!        │
//!        ▼
//! FileSystem             (NativeFileSystem)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//! use unbarrel::{
//!     BarrelTransform, ExportGraphResolver, ImportRewriter, NativeFileSystem, RewriteOptions,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rewriter = ImportRewriter::new(
//!     ExportGraphResolver::new(NativeFileSystem),
//!     vec![PathBuf::from("/app/src/components")],
//!     RewriteOptions::default(),
//! );
//! let transform = BarrelTransform::new(rewriter);
//!
//! let output = transform.transform_file(Path::new("/app/src/app.tsx"))?;
//! if output.modified {
//!     println!("{}", output.code);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! Shapes that are deliberately not resolved (`export * as NS`, re-exported
//! imports, destructured exports) and names a consumer asks for but no barrel
//! exports are reported as [`Diagnostic`] values next to results, and logged
//! through `tracing`. Only missing files, syntax errors and default/namespace
//! imports of a barrel are errors.

pub mod cache;
pub mod diagnostics;
pub mod error;
pub mod exports;
pub mod parser;
pub mod paths;
pub mod resolver;
pub mod rewrite;
pub mod runtime;
pub mod transform;

// Test utilities (available in test builds)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::ExportGraphCache;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{ResolveError, RewriteError, TransformError};
pub use exports::{ExportMap, ExportRecord, ResolvedBarrel};
pub use parser::{DeclarationNode, DeclarationTree, ReExportSpecifier, parse_declarations};
pub use resolver::ExportGraphResolver;
pub use rewrite::{
    ImportRewriter, ImportSpecifier, ImportStatement, Rewrite, RewriteOptions, RewriteOutcome,
    SpecifierStyle,
};
pub use runtime::{FileMetadata, FileSystem, NativeFileSystem, RuntimeError, RuntimeResult};
pub use transform::{BarrelTransform, TransformOutput};
