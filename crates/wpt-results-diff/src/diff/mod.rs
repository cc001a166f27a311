//! Results diff generation and filtering.
//!
//! This module compares two run summaries (before vs after) and produces a
//! per-path delta map, filtered by change category and path scope.
//!
//! # Example
//! ```ignore
//! use wpt_results_diff::diff::{compute_diff, DiffFilter};
//! use wpt_results_diff::snapshot::read_snapshot;
//!
//! let before = read_snapshot("before.json")?;
//! let after = read_snapshot("after.json")?;
//! let filter = DiffFilter::all().with_paths(["/css/"]);
//! let diff = compute_diff(&before, &after, &filter);
//! ```

mod engine;
mod filter;
mod schema;

// Public API exports
pub use engine::{build_report, classify, compute_changes, compute_diff, summarize};
pub use filter::{load_filter, validate_filter, DiffFilter};
pub use schema::{Category, Change, Delta, Diff, DiffReport, DiffSummary};
