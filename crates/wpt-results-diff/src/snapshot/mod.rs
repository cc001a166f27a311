//! Run summary input and diff report output.
//!
//! A run summary is a JSON object mapping each test path to its
//! `[passing, total]` counter.

pub mod json;

use crate::counter::Counter;
use std::collections::HashMap;

/// Complete mapping from test path to counter for one run
pub type Snapshot = HashMap<String, Counter>;

pub use json::{read_snapshot, validate_snapshot, write_report};
