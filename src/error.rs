//! Error types for connector-admin
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteError;

/// Result type alias for connector-admin operations
pub type AdminResult<T> = Result<T, AdminError>;

/// Main error type for connector-admin operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// Bad connector name, invalid connector file, bad topology selection
    #[error("{0}")]
    Configuration(String),

    /// A required local configuration directory or file is missing
    #[error("{0}")]
    ConfigFileNotFound(String),

    /// The local connector directory exists but could not be enumerated
    #[error("{source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML in a configuration file
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Remote execution error outside of a per-host fan-out
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Local I/O error, surfaced unmodified
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
