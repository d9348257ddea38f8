//! Check command implementation.

use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Requires a configuration file, validates it against the filesystem and
/// resolves every configured barrel. Resolution diagnostics are reported as
/// warnings and do not fail the check.
pub fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let loaded = utils::load_config(args.config.as_deref(), &cwd, true)?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "checking configuration");
    }

    unbarrel_config::validate_fs(&loaded.config, &loaded.base)?;

    let transform = utils::build_transform(&loaded);
    let resolver = transform.rewriter().resolver();
    let mut diagnostics = 0;

    for dir in transform.rewriter().barrels() {
        let barrel = resolver.resolve(dir)?;
        diagnostics += barrel.diagnostics.len();
        ui::success(&format!(
            "{}: {} exports",
            dir.strip_prefix(&cwd).unwrap_or(dir).display(),
            barrel.len()
        ));
    }

    if diagnostics > 0 {
        ui::warning(&format!("{} diagnostics while resolving barrels", diagnostics));
    } else {
        ui::info("configuration is valid");
    }
    Ok(())
}
