//! Remote Executor Port
//!
//! Narrow interface over "run a command on host H" and "copy a file to host H".
//! The host is always an explicit parameter; there is no ambient current-host state.

use std::path::Path;

use crate::domain::value_objects::Host;

/// Transport-level failure talking to a host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Could not reach or authenticate to the host
    #[error("Connection error: {0}")]
    Connection(String),
    /// Could not start the local transport process
    #[error("Failed to spawn {program}: {message}")]
    Spawn { program: String, message: String },
    /// File transfer failed
    #[error("Transfer failed: {0}")]
    Transfer(String),
    /// A helper command the transport relies on failed
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Result of a remote command that was actually executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exit status zero; captured stdout
    Success { output: String },
    /// Non-zero exit status; captured error text
    Failure { message: String },
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, CommandOutcome::Success { .. })
    }

    /// Captured text regardless of status
    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Success { output } => output,
            CommandOutcome::Failure { message } => message,
        }
    }
}

/// Executes commands and copies on one named host
pub trait RemoteExecutor: Send + Sync {
    /// Run a shell command with elevated privilege
    fn run_privileged(&self, host: &Host, command: &str) -> Result<CommandOutcome, RemoteError>;

    /// Copy a local file into `remote_dir` (keeping its file name)
    fn copy_file(
        &self,
        host: &Host,
        local_path: &Path,
        remote_dir: &str,
        use_elevated_privilege: bool,
    ) -> Result<(), RemoteError>;

    /// Check whether a regular file exists at `path`
    fn path_exists(&self, host: &Host, path: &str) -> Result<bool, RemoteError>;

    /// Read a remote file as text
    fn read_file(&self, host: &Host, path: &str) -> Result<String, RemoteError>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn run_privileged(&self, host: &Host, command: &str) -> Result<CommandOutcome, RemoteError> {
        (**self).run_privileged(host, command)
    }

    fn copy_file(
        &self,
        host: &Host,
        local_path: &Path,
        remote_dir: &str,
        use_elevated_privilege: bool,
    ) -> Result<(), RemoteError> {
        (**self).copy_file(host, local_path, remote_dir, use_elevated_privilege)
    }

    fn path_exists(&self, host: &Host, path: &str) -> Result<bool, RemoteError> {
        (**self).path_exists(host, path)
    }

    fn read_file(&self, host: &Host, path: &str) -> Result<String, RemoteError> {
        (**self).read_file(host, path)
    }
}
