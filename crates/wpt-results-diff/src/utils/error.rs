//! Error types for the library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and main.rs.
//! The diff engine itself is total and has no error type.

use thiserror::Error;

/// Errors that can occur reading, validating, or writing summaries and reports
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Counter for {path} has {passing} passing out of {total}")]
    InvariantViolated {
        path: String,
        passing: u64,
        total: u64,
    },
}

/// Errors that can occur loading a diff filter
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read filter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Filter TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Filter selects no categories (enable added, deleted, or changed)")]
    NoCategories,

    #[error("Filter scope contains an empty path; use \"/\" to match every path")]
    EmptyScopePath,
}
