use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wpt_results_diff::commands::{
    resolve_filter, run_diff, validate_args, validate_snapshot_file, DiffArgs,
};
use wpt_results_diff::diff::{Delta, DiffFilter};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn summaries(dir: &TempDir) -> (PathBuf, PathBuf) {
    let before = write_file(
        dir.path(),
        "before.json",
        r#"{"/mock/removed.html": [1, 2], "/mock/changed.html": [2, 5]}"#,
    );
    let after = write_file(
        dir.path(),
        "after.json",
        r#"{"/mock/changed.html": [3, 5], "/mock/added.html": [1, 3]}"#,
    );
    (before, after)
}

#[test]
fn test_validate_args_valid() {
    let args = DiffArgs {
        before: PathBuf::from("before.json"),
        after: PathBuf::from("after.json"),
        paths: vec!["/css/".to_string()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_before() {
    let args = DiffArgs {
        after: PathBuf::from("after.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_scope_path() {
    let args = DiffArgs {
        before: PathBuf::from("before.json"),
        after: PathBuf::from("after.json"),
        paths: vec![String::new()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_resolve_filter_defaults_to_all() {
    let filter = resolve_filter(&DiffArgs::default()).unwrap();
    assert_eq!(filter, DiffFilter::all());
}

#[test]
fn test_resolve_filter_flags_select_categories() {
    let args = DiffArgs {
        deleted: true,
        paths: vec!["/mock/".to_string()],
        ..Default::default()
    };

    let filter = resolve_filter(&args).unwrap();
    assert_eq!(filter, DiffFilter::none().with_deleted(true).with_paths(["/mock/"]));
}

#[test]
fn test_resolve_filter_flags_override_file() {
    let dir = TempDir::new().unwrap();
    let filter_file = write_file(
        dir.path(),
        "filter.toml",
        "added = true\nchanged = true\npaths = [\"/css/\"]\n",
    );

    // File alone
    let args = DiffArgs {
        filter_file: Some(filter_file.clone()),
        ..Default::default()
    };
    let filter = resolve_filter(&args).unwrap();
    assert_eq!(
        filter,
        DiffFilter::none()
            .with_added(true)
            .with_changed(true)
            .with_paths(["/css/"])
    );

    // Flags replace categories, file keeps scope
    let args = DiffArgs {
        filter_file: Some(filter_file),
        deleted: true,
        ..Default::default()
    };
    let filter = resolve_filter(&args).unwrap();
    assert_eq!(filter, DiffFilter::none().with_deleted(true).with_paths(["/css/"]));
}

#[test]
fn test_resolve_filter_rejects_file_without_categories() {
    let dir = TempDir::new().unwrap();
    let filter_file = write_file(dir.path(), "filter.toml", "paths = [\"/css/\"]\n");

    let args = DiffArgs {
        filter_file: Some(filter_file),
        ..Default::default()
    };
    assert!(resolve_filter(&args).is_err());
}

#[test]
fn test_run_diff_all_categories() {
    let dir = TempDir::new().unwrap();
    let (before, after) = summaries(&dir);

    let report = run_diff(&DiffArgs {
        before,
        after,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(report.deltas.len(), 3);
    assert_eq!(report.deltas["/mock/added.html"], Delta::new(3, 3));
    assert_eq!(report.deltas["/mock/changed.html"], Delta::new(1, 5));
    assert_eq!(report.deltas["/mock/removed.html"], Delta::new(2, 2));
    assert_eq!(report.summary.added, 1);
    assert_eq!(report.summary.deleted, 1);
    assert_eq!(report.summary.changed, 1);
}

#[test]
fn test_run_diff_changed_only() {
    let dir = TempDir::new().unwrap();
    let (before, after) = summaries(&dir);

    let report = run_diff(&DiffArgs {
        before,
        after,
        changed: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(report.deltas.len(), 1);
    assert_eq!(report.deltas["/mock/changed.html"], Delta::new(1, 5));
}

#[test]
fn test_run_diff_rejects_invalid_counter() {
    let dir = TempDir::new().unwrap();
    let before = write_file(dir.path(), "before.json", r#"{"/a.html": [3, 2]}"#);
    let after = write_file(dir.path(), "after.json", r#"{"/a.html": [1, 2]}"#);

    let err = run_diff(&DiffArgs {
        before,
        after,
        ..Default::default()
    })
    .unwrap_err();

    assert!(format!("{:#}", err).contains("Invalid before summary"));
}

#[test]
fn test_run_diff_missing_summary() {
    let dir = TempDir::new().unwrap();
    let after = write_file(dir.path(), "after.json", "{}");

    let result = run_diff(&DiffArgs {
        before: dir.path().join("missing.json"),
        after,
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_resolve_filter_rejects_empty_scope_in_file() {
    let dir = TempDir::new().unwrap();
    let filter_file = write_file(dir.path(), "filter.toml", "changed = true\npaths = [\"\"]\n");

    let args = DiffArgs {
        filter_file: Some(filter_file),
        ..Default::default()
    };
    assert!(resolve_filter(&args).is_err());
}

#[test]
fn test_validate_snapshot_file_with_huge_totals() {
    let dir = TempDir::new().unwrap();
    let summary = write_file(
        dir.path(),
        "summary.json",
        &format!(
            r#"{{"/a.html": [0, {max}], "/b.html": [0, {max}]}}"#,
            max = u64::MAX
        ),
    );

    assert!(validate_snapshot_file(summary).is_ok());
}
