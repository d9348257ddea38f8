//! Logging infrastructure for the unbarrel CLI.
//!
//! Resolution steps are logged at debug level and skipped declarations at
//! warn level by the library crates; this module decides what reaches the
//! terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use unbarrel_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Rewriting imports");
//! debug!("Resolving barrel: {}", "src/components");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "unbarrel=debug,unbarrel_config=debug,unbarrel_cli=debug";

/// Filter used by `--quiet`.
pub const QUIET_FILTER: &str = "unbarrel=error,unbarrel_config=error,unbarrel_cli=error";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "unbarrel=warn,unbarrel_config=warn,unbarrel_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any logging.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for unbarrel crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: WARN for the libraries, INFO for the CLI
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
