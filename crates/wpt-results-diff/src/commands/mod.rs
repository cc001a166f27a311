//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components and add application-level
//! error context.

pub mod diff;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use diff::{execute_diff, resolve_filter, run_diff, validate_args};
pub use models::DiffArgs;
pub use utils::{display_version, subtest_totals, validate_snapshot_file};
