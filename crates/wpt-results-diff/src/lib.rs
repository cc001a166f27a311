//! WPT Results Diff library
//!
//! Compares two web-platform-tests run summaries (per-test pass/total
//! counters) and reports which test files were added, deleted, or changed.
//!
//! This exposes the internal modules for the `wpt-diff` CLI and for testing.

pub mod commands;
pub mod counter;
pub mod diff;
pub mod snapshot;
pub mod utils;

pub use counter::Counter;
pub use diff::{compute_diff, Delta, Diff, DiffFilter};
pub use snapshot::Snapshot;
