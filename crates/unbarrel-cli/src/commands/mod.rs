//! Command implementations.
//!
//! - [`rewrite`] - Rewrite barrel imports in source files
//! - [`exports`] - Print the export map of one barrel
//! - [`check`] - Validate configuration and resolve every barrel
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod exports;
pub mod rewrite;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use exports::execute as exports_execute;
pub use rewrite::execute as rewrite_execute;
