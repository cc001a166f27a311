//! Per-test outcome counters.
//!
//! A results summary records, for every test file, how many of its subtests
//! passed and how many ran. Summaries serialize each counter as the
//! two-element array `[passing, total]`.

use serde::{Deserialize, Serialize};

/// Outcome of a single test file: `passing` out of `total` subtests.
///
/// Callers keep `passing <= total`; nothing in this crate enforces it
/// except [`crate::snapshot::validate_snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct Counter {
    /// Number of passing subtests
    pub passing: u64,

    /// Number of subtests that ran
    pub total: u64,
}

impl Counter {
    /// Counter used for a path missing from a snapshot
    pub const ZERO: Counter = Counter {
        passing: 0,
        total: 0,
    };

    pub fn new(passing: u64, total: u64) -> Self {
        Self { passing, total }
    }
}

impl From<[u64; 2]> for Counter {
    fn from([passing, total]: [u64; 2]) -> Self {
        Self { passing, total }
    }
}

impl From<Counter> for [u64; 2] {
    fn from(counter: Counter) -> Self {
        [counter.passing, counter.total]
    }
}
