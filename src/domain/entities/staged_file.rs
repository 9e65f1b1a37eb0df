//! StagedFile entity - a local connector file ready to be pushed

use std::path::{Path, PathBuf};

/// A connector configuration file staged in the local connector directory.
///
/// Lives only for the duration of one `add` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    file_name: String,
    local_path: PathBuf,
}

impl StagedFile {
    pub fn new(file_name: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            local_path: local_path.into(),
        }
    }

    /// Build from a directory and an entry name in it
    pub fn in_dir(dir: &Path, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let local_path = dir.join(&file_name);
        Self {
            file_name,
            local_path,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }
}
