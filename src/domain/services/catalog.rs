//! Connector catalog service
//!
//! Resolves which staged connector files an action applies to. Read-only:
//! only existence checks, directory listing and file reads.

use std::path::{Path, PathBuf};

use crate::domain::entities::StagedFile;
use crate::domain::ports::{ListError, LocalFileSystem};
use crate::domain::value_objects::{join_remote, ConnectorName, PROPERTIES_EXTENSION};
use crate::error::{AdminError, AdminResult};
use crate::properties;

/// Property every connector file must define
pub const CONNECTOR_NAME_KEY: &str = "connector.name";

/// Outcome of enumerating the whole connector directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogResolution {
    /// At least one staged file, sorted by name
    Files(Vec<StagedFile>),
    /// The directory exists but holds nothing
    Empty,
}

/// Locally staged connector configuration files
pub struct ConnectorCatalog<FS: LocalFileSystem> {
    fs: FS,
    local_dir: PathBuf,
}

impl<FS: LocalFileSystem> ConnectorCatalog<FS> {
    pub fn new(fs: FS, local_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            local_dir: local_dir.into(),
        }
    }

    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    /// Local path of the staged file for `name`
    pub fn local_path(&self, name: &ConnectorName) -> PathBuf {
        self.local_dir.join(name.file_name())
    }

    /// Remote path of `name` inside `remote_dir`
    pub fn remote_path(&self, name: &ConnectorName, remote_dir: &str) -> String {
        join_remote(remote_dir, &name.file_name())
    }

    /// Look up the single staged file for `name`
    pub fn resolve_single(&self, name: &ConnectorName) -> AdminResult<StagedFile> {
        let path = self.local_path(name);
        if !self.fs.file_exists(&path) {
            return Err(AdminError::Configuration(format!(
                "Configuration for connector {} not found",
                name
            )));
        }
        Ok(StagedFile::new(name.file_name(), path))
    }

    /// Enumerate every entry of the connector directory
    pub fn resolve_all(&self) -> AdminResult<CatalogResolution> {
        if !self.fs.is_dir(&self.local_dir) {
            return Err(self.missing_dir_error());
        }

        let names = match self.fs.list_directory(&self.local_dir) {
            Ok(names) => names,
            Err(ListError::NotFound(_)) => return Err(self.missing_dir_error()),
            Err(ListError::Unreadable(path, source)) => {
                return Err(AdminError::ListDirectory { path, source })
            }
        };

        if names.is_empty() {
            return Ok(CatalogResolution::Empty);
        }

        let files = names
            .into_iter()
            .map(|name| StagedFile::in_dir(&self.local_dir, name))
            .collect();
        Ok(CatalogResolution::Files(files))
    }

    /// Check that a staged file is a usable connector configuration
    pub fn validate(&self, file: &StagedFile) -> AdminResult<()> {
        let has_extension = Path::new(file.file_name())
            .extension()
            .is_some_and(|ext| ext == PROPERTIES_EXTENSION);
        if !has_extension {
            return Err(AdminError::Configuration(format!(
                "Connector configuration {} must be a .{} file",
                file.local_path().display(),
                PROPERTIES_EXTENSION
            )));
        }

        let content = self.fs.read_to_string(file.local_path()).map_err(|e| {
            AdminError::Configuration(format!(
                "Could not read connector configuration {}: {}",
                file.local_path().display(),
                e
            ))
        })?;

        let props = properties::parse(&content);
        match props.get(CONNECTOR_NAME_KEY) {
            Some(value) if !value.is_empty() => Ok(()),
            _ => Err(AdminError::Configuration(format!(
                "Catalog configuration {} does not contain {}",
                file.file_name(),
                CONNECTOR_NAME_KEY
            ))),
        }
    }

    fn missing_dir_error(&self) -> AdminError {
        AdminError::ConfigFileNotFound(format!(
            "Cannot add connectors because directory {} does not exist",
            self.local_dir.display()
        ))
    }
}
