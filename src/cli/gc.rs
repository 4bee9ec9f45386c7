//! rrgc - compute the GC list and act on it

use std::path::PathBuf;

use clap::Args;

use crate::app::{AppContext, ListMode};
use crate::cli::output::{
    GcReport, OutputFormat, emit_json, emit_summary, rm_line, robot_ok, robot_partial,
};
use crate::core::{Window, parse_window};
use crate::error::{Result, RrgcError};
use crate::gc::{compute_gc_list, remove_paths};

#[derive(Args, Debug, Default)]
pub struct GcArgs {
    /// Retention windows as "<duration>,<max-keep>", e.g. "2h,5"
    #[arg(value_name = "WINDOWS")]
    pub windows: Vec<String>,

    /// File globs (after `--`)
    #[arg(value_name = "GLOBS", last = true)]
    pub globs: Vec<String>,

    /// Dry run - print what would be deleted
    #[arg(long)]
    pub dry_run: bool,

    /// Print every deleted path
    #[arg(long)]
    pub verbose: bool,

    /// List the files to keep instead of deleting the others
    #[arg(long)]
    pub keep: bool,
}

pub fn run(ctx: &AppContext, args: &GcArgs) -> Result<()> {
    let windows = resolve_windows(ctx, args)?;
    if windows.is_empty() || args.globs.is_empty() {
        return Err(RrgcError::Usage(
            "at least one window and one glob are required: rrgc WINDOWS -- GLOBS".to_string(),
        ));
    }
    tracing::debug!(
        windows = ?windows.iter().map(ToString::to_string).collect::<Vec<_>>(),
        globs = ?args.globs,
        "args"
    );

    let list = compute_gc_list(&args.globs, &windows)?;
    let options = &ctx.options;
    tracing::debug!(
        keep = list.keep.len(),
        drop = list.drop.len(),
        dry_run = options.dry_run,
        verbose = options.verbose,
        mode = ?options.mode,
        "to delete"
    );

    let mut report = GcReport {
        windows: &windows,
        globs: &args.globs,
        dry_run: options.dry_run,
        keep: &list.keep,
        drop: &list.drop,
        deleted: Vec::new(),
    };

    if options.mode == ListMode::Keep {
        return match ctx.output_format {
            OutputFormat::Json => emit_json(&robot_ok(report)),
            OutputFormat::Human => {
                for path in &list.keep {
                    println!("{}", path.display());
                }
                Ok(())
            }
        };
    }

    if ctx.output_format == OutputFormat::Human && (options.dry_run || options.verbose) {
        for path in &list.drop {
            println!("{}", rm_line(path));
        }
    }

    let failed = if options.dry_run {
        None
    } else {
        let outcome = remove_paths(&list.drop);
        let failed_paths: Vec<&PathBuf> = outcome
            .as_ref()
            .err()
            .map(|err| err.failures.iter().map(|f| &f.path).collect())
            .unwrap_or_default();
        report.deleted = list
            .drop
            .iter()
            .filter(|path| !failed_paths.contains(path))
            .cloned()
            .collect();
        tracing::debug!(
            deleted = report.deleted.len(),
            failed = failed_paths.len(),
            "deletion finished"
        );
        outcome.err()
    };

    match ctx.output_format {
        OutputFormat::Json => match &failed {
            Some(err) => {
                let warnings = err.failures.iter().map(ToString::to_string).collect();
                let completed = report.deleted.len();
                emit_json(&robot_partial(report, completed, warnings))?;
            }
            None => emit_json(&robot_ok(report))?,
        },
        OutputFormat::Human => {
            if options.verbose {
                let dropped = if options.dry_run {
                    list.drop.len()
                } else {
                    report.deleted.len()
                };
                emit_summary(list.keep.len(), dropped, options.dry_run);
            }
        }
    }

    match failed {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Windows from the command line, or from configuration when none were given.
fn resolve_windows(ctx: &AppContext, args: &GcArgs) -> Result<Vec<Window>> {
    if args.windows.is_empty() {
        return Ok(ctx.config.windows.clone());
    }
    args.windows
        .iter()
        .map(|spec| parse_window(spec).map_err(RrgcError::from))
        .collect()
}
