//! Formatting utilities for durations, export tables and run summaries.

use std::time::Duration;

use owo_colors::{OwoColorize, Stream::Stdout};
use unbarrel::ResolvedBarrel;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use unbarrel_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Counters for one `rewrite` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub scanned: usize,
    pub changed: usize,
    pub imports_rewritten: usize,
    pub diagnostics: usize,
    pub failed: usize,
}

impl RewriteSummary {
    /// One-line description of the run.
    ///
    /// ```
    /// use std::time::Duration;
    /// use unbarrel_cli::ui::RewriteSummary;
    ///
    /// let summary = RewriteSummary { scanned: 10, changed: 2, imports_rewritten: 3, ..Default::default() };
    /// assert_eq!(
    ///     summary.describe(Duration::from_millis(12)),
    ///     "2 of 10 files changed, 3 imports rewritten in 12ms"
    /// );
    /// ```
    pub fn describe(&self, elapsed: Duration) -> String {
        let mut line = format!(
            "{} of {} files changed, {} imports rewritten in {}",
            self.changed,
            self.scanned,
            self.imports_rewritten,
            format_duration(elapsed)
        );
        if self.diagnostics > 0 {
            line.push_str(&format!(" ({} diagnostics)", self.diagnostics));
        }
        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        line
    }
}

/// Print the end-of-run summary to stderr.
pub fn print_rewrite_summary(summary: &RewriteSummary, elapsed: Duration) {
    let line = summary.describe(elapsed);
    if summary.failed > 0 {
        super::warning(&line);
    } else {
        super::success(&line);
    }
}

/// Print a resolved barrel as a name → module table on stdout.
pub fn print_exports(barrel: &ResolvedBarrel) {
    let width = barrel.exports.keys().map(|name| name.len()).max().unwrap_or(0);

    println!(
        "{}",
        barrel
            .root_file
            .display()
            .if_supports_color(Stdout, |path| path.bold().to_string())
    );

    for (name, record) in &barrel.exports {
        let segment = if record.defining_path_segment.is_empty() {
            "."
        } else {
            record.defining_path_segment.as_str()
        };
        let origin = match &record.original_name {
            Some(original) => format!("{} ({})", segment, original),
            None => segment.to_string(),
        };
        let padded = format!("{:<width$}", name, width = width);
        println!(
            "  {}  {}",
            padded.if_supports_color(Stdout, |n| n.cyan().to_string()),
            origin.if_supports_color(Stdout, |o| o.dimmed().to_string())
        );
    }
}
