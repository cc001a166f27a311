use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::snapshot::{read_snapshot, validate_snapshot, Snapshot};
use crate::utils::config::DIFF_VERSION;

/// Validate a run summary JSON file
pub fn validate_snapshot_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let snapshot = read_snapshot(&file_path)
        .with_context(|| format!("Failed to read summary {}", file_path.display()))?;
    validate_snapshot(&snapshot)?;

    let (passing, total) = subtest_totals(&snapshot);

    println!("{}", "✓ Valid summary JSON".green());
    println!("  Test paths: {}", snapshot.len());
    println!("  Subtests:   {}/{} passing", passing, total);

    Ok(())
}

/// Sum of passing and total subtests across every path
///
/// Accumulates in `u128` so summaries of large counters cannot overflow.
pub fn subtest_totals(snapshot: &Snapshot) -> (u128, u128) {
    snapshot
        .values()
        .fold((0u128, 0u128), |(passing, total), counter| {
            (
                passing + u128::from(counter.passing),
                total + u128::from(counter.total),
            )
        })
}

/// Display version information
pub fn display_version() {
    println!("WPT Results Diff v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", DIFF_VERSION);
    println!();
    println!("Compares per-test pass/total counts between two web-platform-tests runs.");
}
