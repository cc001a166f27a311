use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct DiffArgs {
    /// Path to the before summary JSON
    pub before: PathBuf,

    /// Path to the after summary JSON
    pub after: PathBuf,

    /// Report added paths
    pub added: bool,

    /// Report deleted paths
    pub deleted: bool,

    /// Report changed paths
    pub changed: bool,

    /// Path prefixes to restrict the diff to
    pub paths: Vec<String>,

    /// TOML filter file (flags above override it)
    pub filter_file: Option<PathBuf>,

    /// Output path for the JSON report; stdout when unset
    pub output: Option<PathBuf>,
}

impl DiffArgs {
    /// Whether any category flag was given on the command line
    pub fn has_category_flags(&self) -> bool {
        self.added || self.deleted || self.changed
    }
}
