//! unbarrel CLI - rewrite barrel imports into direct imports.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `rewrite`, `exports` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status messages and summaries on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use unbarrel_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
