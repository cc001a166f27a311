//! Core diff engine implementation.
//! Categorizes every path of two run summaries and applies the filter.

use chrono::Utc;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

use super::filter::DiffFilter;
use super::schema::{Change, Delta, Diff, DiffReport, DiffSummary};
use crate::counter::Counter;
use crate::snapshot::Snapshot;
use crate::utils::config::DIFF_VERSION;

/// Compute the filtered per-path diff between two run summaries
///
/// # Arguments
/// * `before` - Summary of the earlier run
/// * `after` - Summary of the later run
/// * `filter` - Categories and path scope to report
///
/// # Returns
/// Map from test path to `Delta` for every path that differs and passes
/// the filter. Paths without an observable difference never appear.
///
/// # Example
/// ```ignore
/// let diff = compute_diff(&before, &after, &DiffFilter::all());
/// for (path, delta) in &diff {
///     println!("{path}: {}/{}", delta.magnitude, delta.total);
/// }
/// ```
pub fn compute_diff(before: &Snapshot, after: &Snapshot, filter: &DiffFilter) -> Diff {
    compute_changes(before, after, filter)
        .into_iter()
        .map(|(path, change)| (path, change.delta()))
        .collect()
}

/// Same selection as [`compute_diff`], keeping the category of each path
pub fn compute_changes(
    before: &Snapshot,
    after: &Snapshot,
    filter: &DiffFilter,
) -> BTreeMap<String, Change> {
    // Step 1: Candidate paths from both sides
    let candidates: BTreeSet<&String> = before.keys().chain(after.keys()).collect();

    debug!(
        "Diffing {} candidate path(s) ({} before, {} after)",
        candidates.len(),
        before.len(),
        after.len()
    );

    // Step 2: Categorize and filter each path
    let mut changes = BTreeMap::new();
    for path in candidates {
        let Some(change) = classify(lookup(before, path), lookup(after, path)) else {
            continue;
        };

        if !filter.includes(change.category()) {
            trace!("Skipping {} ({} not selected)", path, change.category());
            continue;
        }

        if !filter.matches_path(path) {
            trace!("Skipping {} (outside path scope)", path);
            continue;
        }

        changes.insert(path.clone(), change);
    }

    debug!("Diff contains {} path(s)", changes.len());
    changes
}

/// Categorize the difference between two counters for the same path
///
/// A change in total is an addition or deletion measured in subtests;
/// otherwise the magnitude is the change in passing subtests. Returns
/// `None` when the magnitude is zero.
pub fn classify(before: Counter, after: Counter) -> Option<Change> {
    let change = if before.total != after.total {
        let delta = Delta::new(
            after.total.abs_diff(before.total),
            after.total.max(before.total),
        );
        if after.total > before.total {
            Change::Added(delta)
        } else {
            Change::Deleted(delta)
        }
    } else {
        Change::Changed(Delta::new(
            after.passing.abs_diff(before.passing),
            after.total,
        ))
    };

    (change.delta().magnitude != 0).then_some(change)
}

/// Count included paths per category
pub fn summarize(changes: &BTreeMap<String, Change>) -> DiffSummary {
    let mut summary = DiffSummary {
        total_paths: changes.len(),
        ..DiffSummary::default()
    };

    for change in changes.values() {
        match change {
            Change::Added(_) => summary.added += 1,
            Change::Deleted(_) => summary.deleted += 1,
            Change::Changed(_) => summary.changed += 1,
        }
    }

    summary
}

/// Generate a complete diff report comparing two run summaries
///
/// # Arguments
/// * `before_label` / `after_label` - Names recorded in the report (file paths)
/// * `before` / `after` - The summaries to compare
/// * `filter` - Categories and path scope to report
pub fn build_report(
    before_label: &str,
    before: &Snapshot,
    after_label: &str,
    after: &Snapshot,
    filter: &DiffFilter,
) -> DiffReport {
    let changes = compute_changes(before, after, filter);
    let summary = summarize(&changes);

    DiffReport {
        diff_version: DIFF_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        before: before_label.to_string(),
        after: after_label.to_string(),
        filter: filter.clone(),
        deltas: changes
            .into_iter()
            .map(|(path, change)| (path, change.delta()))
            .collect(),
        summary,
    }
}

/// Counter for `path`, or `Counter::ZERO` when the summary lacks it
fn lookup(snapshot: &Snapshot, path: &str) -> Counter {
    snapshot.get(path).copied().unwrap_or(Counter::ZERO)
}
