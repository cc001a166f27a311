//! Configuration and constants for the CLI.

/// Current diff report schema version
pub const DIFF_VERSION: &str = "1.0.0";

/// Default output path for diff reports
pub const DEFAULT_REPORT_PATH: &str = "artifacts/diff.json";
