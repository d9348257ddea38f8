use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite barrel imports in source files
    ///
    /// Without --write or --check, prints the rewritten code of every file
    /// that would change.
    Rewrite(RewriteArgs),

    /// Print the resolved export map of a barrel directory
    Exports(ExportsArgs),

    /// Validate configuration and resolve every configured barrel
    Check(CheckArgs),
}

/// Arguments for the rewrite command
#[derive(Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Files or directories to transform
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Write rewritten files in place
    #[arg(short, long, conflicts_with = "check")]
    pub write: bool,

    /// Exit with an error if any file would be rewritten
    #[arg(long)]
    pub check: bool,

    /// Barrel directory to rewrite imports for (repeatable, replaces configured barrels)
    #[arg(short, long = "barrel", value_name = "DIR")]
    pub barrels: Vec<PathBuf>,

    /// Print absolute import paths instead of relative ones
    #[arg(long)]
    pub absolute: bool,

    /// Path to a config file (unbarrel.toml or package.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the exports command
#[derive(Args, Debug, Clone)]
pub struct ExportsArgs {
    /// Barrel directory to resolve
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Print the export map as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to a config file (unbarrel.toml or package.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
