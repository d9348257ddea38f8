//! unbarrel CLI - rewrite barrel imports into direct imports.
//!
//! This is the main entry point. It handles argument parsing, logging
//! initialization and command dispatch.

use clap::Parser;
use miette::Result;
use unbarrel_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Rewrite(rewrite_args) => commands::rewrite_execute(rewrite_args),
        cli::Command::Exports(exports_args) => commands::exports_execute(exports_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
