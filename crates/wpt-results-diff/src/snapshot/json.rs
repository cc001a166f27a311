//! JSON summary reader and report writer.

use super::Snapshot;
use crate::diff::DiffReport;
use crate::utils::error::SnapshotError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a run summary from a JSON file
///
/// # Errors
/// * `SnapshotError::Io` - File cannot be opened
/// * `SnapshotError::Json` - Contents are not a path -> `[passing, total]` map
pub fn read_snapshot(input_path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path)?;
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;

    debug!("Summary loaded: {} test path(s)", snapshot.len());

    Ok(snapshot)
}

/// Check that every counter satisfies `passing <= total`
///
/// Paths are checked in sorted order so the reported offender is stable.
///
/// # Errors
/// * `SnapshotError::InvariantViolated` - First offending path
pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let mut paths: Vec<&String> = snapshot.keys().collect();
    paths.sort();

    for path in paths {
        let counter = snapshot[path];
        if counter.passing > counter.total {
            return Err(SnapshotError::InvariantViolated {
                path: path.clone(),
                passing: counter.passing,
                total: counter.total,
            });
        }
    }

    Ok(())
}

/// Write a diff report to a JSON file
///
/// Parent directories are created as needed.
///
/// # Errors
/// * `SnapshotError::InvalidPath` - Path is empty, is a directory, or its parent cannot be created
/// * `SnapshotError::Io` / `SnapshotError::Json` - Write or serialization failure
pub fn write_report(report: &DiffReport, output_path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let output_path = output_path.as_ref();

    info!("Writing diff report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                SnapshotError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, report)?;

    info!(
        "Diff report written ({} path(s))",
        report.summary.total_paths
    );

    Ok(())
}

fn validate_output_path(path: &Path) -> Result<(), SnapshotError> {
    if path.as_os_str().is_empty() {
        return Err(SnapshotError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(SnapshotError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
