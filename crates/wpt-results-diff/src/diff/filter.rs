//! Diff filter configuration.
//!
//! Selects which change categories are reported and restricts the result
//! to a set of path prefixes. Filters can be loaded from TOML:
//!
//! ```toml
//! added = true
//! changed = true
//! paths = ["/css/", "/dom/nodes/Node-cloneNode.html"]
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::schema::Category;
use crate::utils::error::ConfigError;

/// Which differences to report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffFilter {
    /// Report paths whose subtest count grew
    pub added: bool,

    /// Report paths whose subtest count shrank
    pub deleted: bool,

    /// Report paths whose pass count changed
    pub changed: bool,

    /// Path prefixes to restrict to; empty means every path
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub paths: BTreeSet<String>,
}

impl DiffFilter {
    /// Filter with every category enabled and no path restriction
    pub fn all() -> Self {
        Self {
            added: true,
            deleted: true,
            changed: true,
            paths: BTreeSet::new(),
        }
    }

    /// Filter with every category disabled
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_added(mut self, enabled: bool) -> Self {
        self.added = enabled;
        self
    }

    pub fn with_deleted(mut self, enabled: bool) -> Self {
        self.deleted = enabled;
        self
    }

    pub fn with_changed(mut self, enabled: bool) -> Self {
        self.changed = enabled;
        self
    }

    /// Replace the path scope
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Whether paths of `category` are reported
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Added => self.added,
            Category::Deleted => self.deleted,
            Category::Changed => self.changed,
        }
    }

    /// Whether `path` is inside the scope
    ///
    /// Matching is a literal string prefix test: `/` matches everything,
    /// `/css/` matches the directory, and `/mock/path` also matches
    /// `/mock/path-2.html`.
    pub fn matches_path(&self, path: &str) -> bool {
        self.paths.is_empty() || self.paths.iter().any(|scope| path.starts_with(scope.as_str()))
    }

    /// Filter for the same selection with before and after swapped
    pub fn reversed(&self) -> Self {
        Self {
            added: self.deleted,
            deleted: self.added,
            changed: self.changed,
            paths: self.paths.clone(),
        }
    }

    /// Whether no category is enabled
    pub fn is_empty(&self) -> bool {
        !(self.added || self.deleted || self.changed)
    }
}

/// Load a diff filter from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If the file cannot be read
/// * `ConfigError::Parse` - If the TOML is invalid
///
/// # Example
/// ```ignore
/// let filter = load_filter("filter.toml")?;
/// ```
pub fn load_filter(path: impl AsRef<Path>) -> Result<DiffFilter, ConfigError> {
    let path = path.as_ref();
    debug!("Loading diff filter from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let filter: DiffFilter = toml::from_str(&contents)?;

    debug!(
        "Filter loaded: added={}, deleted={}, changed={}, {} scope path(s)",
        filter.added,
        filter.deleted,
        filter.changed,
        filter.paths.len()
    );

    Ok(filter)
}

/// Reject filters that can never report anything or carry an empty scope entry
pub fn validate_filter(filter: &DiffFilter) -> Result<(), ConfigError> {
    if filter.is_empty() {
        return Err(ConfigError::NoCategories);
    }
    if filter.paths.iter().any(String::is_empty) {
        return Err(ConfigError::EmptyScopePath);
    }
    Ok(())
}
