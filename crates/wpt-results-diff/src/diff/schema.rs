//! Schema definitions for results diffs.
//!
//! Defines the per-path delta, the change categories, and the report
//! envelope written by the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::filter::DiffFilter;

/// Per-path diff output, keyed by test path
pub type Diff = BTreeMap<String, Delta>;

/// Difference for a single test path
///
/// Serialized as `[magnitude, total]`, matching the counter format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct Delta {
    /// How many subtests were added, removed, or flipped
    pub magnitude: u64,

    /// Total the magnitude is measured against
    pub total: u64,
}

impl Delta {
    pub fn new(magnitude: u64, total: u64) -> Self {
        Self { magnitude, total }
    }
}

impl From<[u64; 2]> for Delta {
    fn from([magnitude, total]: [u64; 2]) -> Self {
        Self { magnitude, total }
    }
}

impl From<Delta> for [u64; 2] {
    fn from(delta: Delta) -> Self {
        [delta.magnitude, delta.total]
    }
}

/// Kind of difference a path exhibits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The after run has more subtests
    Added,
    /// The after run has fewer subtests
    Deleted,
    /// Same subtests, different pass count
    Changed,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Added => "added",
            Category::Deleted => "deleted",
            Category::Changed => "changed",
        };
        f.write_str(name)
    }
}

/// A categorized difference for one path
///
/// Each path maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(Delta),
    Deleted(Delta),
    Changed(Delta),
}

impl Change {
    pub fn category(&self) -> Category {
        match self {
            Change::Added(_) => Category::Added,
            Change::Deleted(_) => Category::Deleted,
            Change::Changed(_) => Category::Changed,
        }
    }

    pub fn delta(&self) -> Delta {
        match *self {
            Change::Added(delta) | Change::Deleted(delta) | Change::Changed(delta) => delta,
        }
    }
}

/// Counts of included paths per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,

    /// Number of paths in the diff
    pub total_paths: usize,
}

/// Complete diff report comparing two run summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version for the report format
    pub diff_version: String,

    /// Timestamp when the diff was generated
    pub generated_at: String,

    /// Label of the before summary (usually its file path)
    pub before: String,

    /// Label of the after summary
    pub after: String,

    /// Filter the diff was computed with
    pub filter: DiffFilter,

    /// Per-path deltas
    pub deltas: Diff,

    /// Counts per category
    pub summary: DiffSummary,
}
