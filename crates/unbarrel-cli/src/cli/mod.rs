//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `unbarrel rewrite` - Rewrite barrel imports into direct imports
//! - `unbarrel exports` - Print the resolved export map of a barrel
//! - `unbarrel check` - Validate configuration and resolve every barrel

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ExportsArgs, RewriteArgs};

/// unbarrel - rewrite barrel imports into direct imports
#[derive(Parser, Debug)]
#[command(
    name = "unbarrel",
    version,
    about = "Rewrite barrel imports into direct imports",
    long_about = "unbarrel resolves what each barrel directory (an index file that re-exports\n\
                  its siblings) really exports, and rewrites `import { A } from './barrel'`\n\
                  into imports from the modules that define each name."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
