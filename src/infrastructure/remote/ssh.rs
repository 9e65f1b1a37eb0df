//! SSH Remote Executor
//!
//! Implements the RemoteExecutor port by shelling out to the system `ssh`
//! and `scp` binaries. Authentication is whatever the user's SSH setup
//! provides; `BatchMode` keeps a missing key from blocking on a prompt.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace, warn};

use crate::domain::ports::{CommandOutcome, RemoteError, RemoteExecutor};
use crate::domain::services::{shell_quote, shell_word};
use crate::domain::value_objects::{join_remote, Host};

/// ssh reserves this exit status for its own failures
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Where elevated copies land before the privileged move
const STAGING_DIR: &str = "/tmp";

/// Connection settings shared by every host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshSettings {
    /// Seconds before ssh gives up connecting
    pub connect_timeout: u64,
    /// Private key passed with `-i`
    pub identity_file: Option<PathBuf>,
    /// Wrap privileged commands in `sudo -n`
    pub sudo: bool,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            identity_file: None,
            sudo: true,
        }
    }
}

/// RemoteExecutor backed by the OpenSSH client tools
#[derive(Debug, Clone, Default)]
pub struct SshExecutor {
    settings: SshSettings,
}

impl SshExecutor {
    pub fn new(settings: SshSettings) -> Self {
        Self { settings }
    }

    fn common_options(&self) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.settings.connect_timeout),
        ];
        if let Some(key) = &self.settings.identity_file {
            args.push("-i".to_string());
            args.push(key.to_string_lossy().into_owned());
        }
        args
    }

    /// Arguments for `ssh` up to and including the destination
    pub fn ssh_args(&self, host: &Host) -> Vec<String> {
        let mut args = vec!["-p".to_string(), host.port().to_string()];
        args.extend(self.common_options());
        args.push(host.destination());
        args
    }

    /// Arguments for `scp` copying `local_path` to `remote_path` on `host`
    pub fn scp_args(&self, host: &Host, local_path: &Path, remote_path: &str) -> Vec<String> {
        // scp spells the port flag with a capital P
        let mut args = vec!["-q".to_string(), "-P".to_string(), host.port().to_string()];
        args.extend(self.common_options());
        args.push(local_path.to_string_lossy().into_owned());
        args.push(format!("{}:{}", host.destination(), remote_path));
        args
    }

    /// Wrap a command so it runs through a shell, with sudo when configured
    pub fn privileged_command(&self, command: &str) -> String {
        if self.settings.sudo {
            format!("sudo -n sh -c {}", shell_quote(command))
        } else {
            format!("sh -c {}", shell_quote(command))
        }
    }

    /// Temporary remote path used while copying with elevated privilege
    pub fn staging_path(file_name: &str) -> String {
        join_remote(
            STAGING_DIR,
            &format!("connector-admin.{}.{}", std::process::id(), file_name),
        )
    }

    /// Existence check for a remote file, run with the same privilege as removal
    pub fn exists_command(&self, path: &str) -> String {
        self.privileged_command(&format!("test -f {}", shell_word(path)))
    }

    /// Catalog reads may need root just like the writes
    pub fn read_command(&self, path: &str) -> String {
        self.privileged_command(&format!("cat {}", shell_word(path)))
    }

    fn run(&self, host: &Host, remote_command: &str) -> Result<CommandOutcome, RemoteError> {
        debug!(host = %host, command = remote_command, "ssh");
        let output = Command::new("ssh")
            .args(self.ssh_args(host))
            .arg(remote_command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RemoteError::Spawn {
                program: "ssh".to_string(),
                message: e.to_string(),
            })?;
        interpret_ssh_output(host, &output)
    }

    /// The staged copy belongs to the ssh user, so no privilege is needed
    pub fn discard_command(staged: &str) -> String {
        format!("rm -f {}", shell_word(staged))
    }

    /// Best effort: a failed cleanup is logged, the original error is what gets reported
    fn discard_staged(&self, host: &Host, staged: &str) {
        match self.run(host, &Self::discard_command(staged)) {
            Ok(CommandOutcome::Success { .. }) => debug!(host = %host, "removed staged copy {}", staged),
            Ok(CommandOutcome::Failure { message }) => {
                warn!(host = %host, "could not remove staged copy {}: {}", staged, message)
            }
            Err(e) => warn!(host = %host, "could not remove staged copy {}: {}", staged, e),
        }
    }

    fn scp(&self, host: &Host, local_path: &Path, remote_path: &str) -> Result<(), RemoteError> {
        debug!(host = %host, local = %local_path.display(), remote = remote_path, "scp");
        let output = Command::new("scp")
            .args(self.scp_args(host, local_path, remote_path))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RemoteError::Spawn {
                program: "scp".to_string(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(RemoteError::Transfer(if stderr.is_empty() {
                format!("scp exited with {}", output.status)
            } else {
                stderr
            }))
        }
    }
}

/// Map an ssh process result onto the port's outcome types
fn interpret_ssh_output(host: &Host, output: &Output) -> Result<CommandOutcome, RemoteError> {
    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    trace!(host = %host, status = ?output.status.code(), %stdout, %stderr);

    match output.status.code() {
        Some(0) => Ok(CommandOutcome::Success { output: stdout }),
        Some(SSH_CONNECTION_FAILURE) | None => Err(RemoteError::Connection(if stderr.is_empty() {
            format!("ssh to {} failed", host.address())
        } else {
            stderr
        })),
        Some(_) => Ok(CommandOutcome::Failure {
            message: if stderr.is_empty() { stdout } else { stderr },
        }),
    }
}

impl RemoteExecutor for SshExecutor {
    fn run_privileged(&self, host: &Host, command: &str) -> Result<CommandOutcome, RemoteError> {
        self.run(host, &self.privileged_command(command))
    }

    fn copy_file(
        &self,
        host: &Host,
        local_path: &Path,
        remote_dir: &str,
        use_elevated_privilege: bool,
    ) -> Result<(), RemoteError> {
        let file_name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                RemoteError::Transfer(format!("{} is not a file", local_path.display()))
            })?;
        let target = join_remote(remote_dir, &file_name);

        if !use_elevated_privilege {
            return self.scp(host, local_path, &target);
        }

        let staged = Self::staging_path(&file_name);
        self.scp(host, local_path, &staged)?;
        let move_command = format!("mv {} {}", shell_word(&staged), shell_word(&target));
        match self.run_privileged(host, &move_command)? {
            CommandOutcome::Success { .. } => Ok(()),
            CommandOutcome::Failure { message } => {
                self.discard_staged(host, &staged);
                Err(RemoteError::Transfer(message))
            }
        }
    }

    fn path_exists(&self, host: &Host, path: &str) -> Result<bool, RemoteError> {
        let outcome = self.run(host, &self.exists_command(path))?;
        Ok(outcome.succeeded())
    }

    fn read_file(&self, host: &Host, path: &str) -> Result<String, RemoteError> {
        match self.run(host, &self.read_command(path))? {
            CommandOutcome::Success { output } => Ok(output),
            CommandOutcome::Failure { message } => Err(RemoteError::CommandFailed(message)),
        }
    }
}
