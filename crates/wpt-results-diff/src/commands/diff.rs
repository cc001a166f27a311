//! Diff command implementation.
//! Loads two run summaries, resolves the filter, and reports the deltas.

use super::models::DiffArgs;
use crate::diff::{build_report, load_filter, validate_filter, DiffFilter, DiffReport};
use crate::snapshot::{read_snapshot, validate_snapshot, write_report};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};

/// Execute the diff command
///
/// Writes the report to `args.output` when set, otherwise prints the
/// per-path deltas as JSON on stdout.
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    let report = run_diff(&args)?;

    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write diff report JSON")?;
        println!(
            "📊 Diff report written to {}",
            path.display().to_string().cyan()
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&report.deltas)?);
    }

    info!(
        "{} added, {} deleted, {} changed",
        report.summary.added, report.summary.deleted, report.summary.changed
    );

    Ok(())
}

/// Load, validate, and diff the two summaries named by `args`
pub fn run_diff(args: &DiffArgs) -> Result<DiffReport> {
    // Step 1: Resolve filter
    let filter = resolve_filter(args)?;

    // Step 2: Load summaries
    let before = read_snapshot(&args.before)
        .with_context(|| format!("Failed to read before summary {}", args.before.display()))?;
    let after = read_snapshot(&args.after)
        .with_context(|| format!("Failed to read after summary {}", args.after.display()))?;

    // Step 3: The engine assumes well-formed counters
    validate_snapshot(&before).context("Invalid before summary")?;
    validate_snapshot(&after).context("Invalid after summary")?;

    // Step 4: Diff
    Ok(build_report(
        &args.before.display().to_string(),
        &before,
        &args.after.display().to_string(),
        &after,
        &filter,
    ))
}

/// Combine the filter file and command-line flags
///
/// Category flags replace the file's categories when any is given, and
/// `--path` values replace its scope. With neither a file nor flags every
/// category is reported.
pub fn resolve_filter(args: &DiffArgs) -> Result<DiffFilter> {
    let mut filter = match &args.filter_file {
        Some(path) => load_filter(path).context("Failed to load filter file")?,
        None if args.has_category_flags() => DiffFilter::none(),
        None => DiffFilter::all(),
    };

    if args.has_category_flags() {
        filter = filter
            .with_added(args.added)
            .with_deleted(args.deleted)
            .with_changed(args.changed);
    }

    if !args.paths.is_empty() {
        filter = filter.with_paths(args.paths.iter().cloned());
    }

    validate_filter(&filter)?;

    debug!("Resolved filter: {:?}", filter);
    Ok(filter)
}

/// Validate diff arguments before touching the filesystem
pub fn validate_args(args: &DiffArgs) -> Result<()> {
    if args.before.as_os_str().is_empty() {
        anyhow::bail!("Before summary path cannot be empty");
    }

    if args.after.as_os_str().is_empty() {
        anyhow::bail!("After summary path cannot be empty");
    }

    if args.paths.iter().any(|p| p.is_empty()) {
        anyhow::bail!("Scope paths cannot be empty; use \"/\" to match every path");
    }

    Ok(())
}
