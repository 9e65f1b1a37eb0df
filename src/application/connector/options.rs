//! Connector Options
//!
//! Paths and execution settings for connector operations.

use std::path::PathBuf;

use crate::domain::services::ExecutionMode;

/// Where connectors live locally and remotely
#[derive(Debug, Clone)]
pub struct ConnectorOptions {
    /// Local staging directory (`<name>.properties` files)
    pub local_dir: PathBuf,
    /// Remote catalog directory on every host
    pub remote_dir: String,
    /// Sequential or parallel host visits
    pub mode: ExecutionMode,
}

impl ConnectorOptions {
    pub fn new(local_dir: impl Into<PathBuf>, remote_dir: impl Into<String>) -> Self {
        Self {
            local_dir: local_dir.into(),
            remote_dir: remote_dir.into(),
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
