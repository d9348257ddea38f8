//! Exports command implementation.

use tracing::debug;
use unbarrel::{ExportGraphResolver, NativeFileSystem};

use crate::cli::ExportsArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the exports command.
///
/// Resolves one barrel directory and prints its flattened export map, either
/// as a table or as JSON on stdout.
pub fn execute(args: ExportsArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let dir = utils::resolve_path(&args.dir, &cwd);
    debug!(dir = %dir.display(), "resolving barrel");

    let resolver = ExportGraphResolver::new(NativeFileSystem);
    let barrel = resolver.resolve(&dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*barrel)?);
        return Ok(());
    }

    ui::print_exports(&barrel);
    for diagnostic in &barrel.diagnostics {
        ui::warning(&diagnostic.to_string());
    }
    Ok(())
}
