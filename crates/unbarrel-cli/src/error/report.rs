//! Miette report conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert CliError to a miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Resolve(e) => Report::new(e),
        CliError::Transform(e) => Report::new(e),
        CliError::Config(e) => match e.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "Configuration error: {}", e),
            None => miette::miette!("Configuration error: {}", e),
        },
        CliError::CheckFailed { .. } => {
            miette::miette!(help = "run `unbarrel rewrite --write` to apply the rewrite", "{}", err)
        }
        _ => miette::miette!("{}", err),
    }
}
