//! LocalFileSystem port - the local side of connector staging

use std::path::{Path, PathBuf};

/// Error listing a local directory
#[derive(Debug)]
pub enum ListError {
    /// The directory does not exist
    NotFound(PathBuf),
    /// The directory exists but could not be read
    Unreadable(PathBuf, std::io::Error),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::NotFound(path) => write!(f, "Directory not found: {}", path.display()),
            ListError::Unreadable(_, err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ListError {}

/// Abstract local file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockLocalFs` - in-memory for testing
pub trait LocalFileSystem: Send + Sync {
    /// Entry names in `path`, sorted
    fn list_directory(&self, path: &Path) -> Result<Vec<String>, ListError>;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is an existing regular file
    fn file_exists(&self, path: &Path) -> bool;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;
}

impl<T: LocalFileSystem + ?Sized> LocalFileSystem for &T {
    fn list_directory(&self, path: &Path) -> Result<Vec<String>, ListError> {
        (**self).list_directory(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        (**self).read_to_string(path)
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        (**self).remove_file(path)
    }
}
