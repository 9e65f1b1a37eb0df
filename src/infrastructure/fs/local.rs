//! Local File System Implementation
//!
//! Implements the LocalFileSystem port for local disk operations.

use crate::domain::ports::{ListError, LocalFileSystem};
use std::io;
use std::path::{Path, PathBuf};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl LocalFileSystem for LocalFs {
    fn list_directory(&self, path: &Path) -> Result<Vec<String>, ListError> {
        let entries = std::fs::read_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ListError::NotFound(path.to_path_buf()),
            _ => ListError::Unreadable(path.to_path_buf(), e),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ListError::Unreadable(path.to_path_buf(), e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let p = path.to_string_lossy();
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if p == "~" {
        home
    } else if let Some(rest) = p.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}
