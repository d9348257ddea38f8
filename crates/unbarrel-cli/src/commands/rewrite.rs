//! Rewrite command implementation.
//!
//! Transforms every discovered source file in parallel against one shared
//! resolver, so each barrel is resolved once per run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};
use unbarrel::{FileSystem, SpecifierStyle, TransformError, TransformOutput};

use crate::cli::RewriteArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the rewrite command.
///
/// # Errors
///
/// - Configuration is invalid or a barrel directory is missing
/// - Any file fails to transform (after all files were attempted)
/// - `--check` finds files that would change
pub fn execute(args: RewriteArgs) -> Result<()> {
    let start = Instant::now();
    let cwd = utils::get_cwd()?;

    let mut loaded = utils::load_config(args.config.as_deref(), &cwd, false)?;
    if !args.barrels.is_empty() {
        // Barrels given on the command line are relative to where we run
        loaded.config.barrels = args.barrels.clone();
        loaded.config.root = Some(cwd.clone());
    }
    if args.absolute {
        loaded.config.specifier_style = SpecifierStyle::Absolute;
    }
    unbarrel_config::validate_fs(&loaded.config, &loaded.base)?;

    let transform = utils::build_transform(&loaded);
    let sources = utils::collect_sources(&args.paths, &cwd, &loaded.config)?;
    info!(files = sources.len(), barrels = loaded.config.barrels.len(), "rewriting imports");

    let results: Vec<(PathBuf, std::result::Result<TransformOutput, TransformError>)> = sources
        .par_iter()
        .map(|path| (path.clone(), transform.transform_file(path)))
        .collect();

    let mut summary = ui::RewriteSummary {
        scanned: results.len(),
        ..Default::default()
    };
    let fs = transform.rewriter().resolver().fs();

    for (path, result) in results {
        let display = display_path(&path, &cwd);
        let output = match result {
            Ok(output) => output,
            Err(err) => {
                summary.failed += 1;
                ui::error(&format!("{}: {}", display.display(), err));
                continue;
            }
        };

        summary.diagnostics += output.diagnostics.len();
        if !output.modified {
            continue;
        }
        summary.changed += 1;
        summary.imports_rewritten += output.replaced_imports;

        if args.write {
            fs.write_file(&path, &output.code)?;
            debug!(path = %path.display(), "file rewritten");
        } else if args.check {
            ui::warning(&format!("would rewrite {}", display.display()));
        } else {
            println!("// {}", display.display());
            println!("{}", output.code);
        }
    }

    ui::print_rewrite_summary(&summary, start.elapsed());

    if summary.failed > 0 {
        return Err(CliError::TransformFailed {
            failed: summary.failed,
            total: summary.scanned,
        });
    }
    if args.check && summary.changed > 0 {
        return Err(CliError::CheckFailed { count: summary.changed });
    }

    Ok(())
}

fn display_path<'a>(path: &'a Path, cwd: &Path) -> &'a Path {
    path.strip_prefix(cwd).unwrap_or(path)
}
