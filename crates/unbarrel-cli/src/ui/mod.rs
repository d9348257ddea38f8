//! Terminal output for status messages and summaries.
//!
//! Everything here writes to stderr so stdout stays free for rewritten code
//! and JSON output.

mod format;
mod messages;

pub use format::{RewriteSummary, format_duration, print_exports, print_rewrite_summary};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on flags and environment.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
}
