//! Host value object - one cluster member reachable over SSH

use std::fmt;

use serde::Serialize;

/// Default SSH port
pub const DEFAULT_SSH_PORT: u16 = 22;

/// A cluster member.
///
/// Displays as its address so warnings read `[address]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Host {
    address: String,
    user: String,
    port: u16,
}

impl Host {
    pub fn new(address: impl Into<String>, user: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            user: user.into(),
            port,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// SSH destination (`user@address`)
    pub fn destination(&self) -> String {
        if self.user.is_empty() {
            self.address.clone()
        } else {
            format!("{}@{}", self.user, self.address)
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Where one action lands: a host plus the remote directory on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    pub host: Host,
    pub remote_dir: String,
}

impl DeployTarget {
    pub fn new(host: Host, remote_dir: impl Into<String>) -> Self {
        Self {
            host,
            remote_dir: remote_dir.into(),
        }
    }

    /// Remote path of `file_name` inside this target's directory
    pub fn remote_path(&self, file_name: &str) -> String {
        join_remote(&self.remote_dir, file_name)
    }
}

/// Join a remote (POSIX) directory and a file name
pub fn join_remote(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        return file_name.to_string();
    }
    format!("{}/{}", dir.trim_end_matches('/'), file_name)
}
