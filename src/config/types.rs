//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Host, DEFAULT_SSH_PORT};
use crate::error::{AdminError, AdminResult};
use crate::infrastructure::{expand_home, SshSettings};

use super::loader::{self, ConfigWarning};

/// Cluster membership and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_coordinator")]
    pub coordinator: String,

    #[serde(default)]
    pub workers: Vec<String>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            port: default_port(),
            coordinator: default_coordinator(),
            workers: Vec::new(),
        }
    }
}

fn default_user() -> String {
    "root".to_string()
}

fn default_port() -> u16 {
    DEFAULT_SSH_PORT
}

fn default_coordinator() -> String {
    "localhost".to_string()
}

/// Local staging directory and remote layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_connectors_dir")]
    pub connectors_dir: PathBuf,

    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,

    #[serde(default = "default_conf_dir")]
    pub conf_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            connectors_dir: default_connectors_dir(),
            catalog_dir: default_catalog_dir(),
            conf_dir: default_conf_dir(),
        }
    }
}

fn default_connectors_dir() -> PathBuf {
    PathBuf::from("/etc/opt/connector-admin/connectors")
}

fn default_catalog_dir() -> String {
    "/etc/presto/catalog".to_string()
}

fn default_conf_dir() -> String {
    "/etc/presto".to_string()
}

/// SSH transport options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    #[serde(default)]
    pub identity_file: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub sudo: bool,

    #[serde(default)]
    pub parallel: bool,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            identity_file: None,
            sudo: true,
            parallel: false,
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cluster: ClusterConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub ssh: SshConfig,
}

impl Config {
    /// Load from an explicit path, `CONNECTOR_ADMIN_CONFIG`, the user config, or defaults
    pub fn discover(explicit: Option<&Path>) -> AdminResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (CONNECTOR_ADMIN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    fn host(&self, address: &str) -> Host {
        Host::new(address, self.cluster.user.as_str(), self.cluster.port)
    }

    /// Coordinator host
    pub fn coordinator(&self) -> Host {
        self.host(&self.cluster.coordinator)
    }

    /// Every cluster member: coordinator first, then workers, without duplicates
    pub fn topology(&self) -> Vec<Host> {
        let mut addresses: Vec<&str> = Vec::with_capacity(self.cluster.workers.len() + 1);
        for address in std::iter::once(&self.cluster.coordinator).chain(&self.cluster.workers) {
            if !addresses.contains(&address.as_str()) {
                addresses.push(address);
            }
        }
        addresses.into_iter().map(|a| self.host(a)).collect()
    }

    /// Narrow the topology to `include` (all when empty), minus `exclude`.
    ///
    /// Naming a host outside the topology is an error.
    pub fn select_hosts(&self, include: &[String], exclude: &[String]) -> AdminResult<Vec<Host>> {
        let topology = self.topology();
        let known = |name: &String| -> AdminResult<()> {
            if topology.iter().any(|h| h.address() == name) {
                Ok(())
            } else {
                Err(AdminError::Configuration(format!(
                    "Host {} is not in the cluster topology",
                    name
                )))
            }
        };
        include.iter().try_for_each(known)?;
        exclude.iter().try_for_each(known)?;

        Ok(topology
            .into_iter()
            .filter(|h| include.is_empty() || include.iter().any(|i| i == h.address()))
            .filter(|h| !exclude.iter().any(|x| x == h.address()))
            .collect())
    }

    /// Local connector staging directory, `~` expanded
    pub fn connectors_dir(&self) -> PathBuf {
        expand_home(&self.paths.connectors_dir)
    }

    /// Settings for the SSH executor
    pub fn ssh_settings(&self) -> SshSettings {
        SshSettings {
            connect_timeout: self.ssh.connect_timeout,
            identity_file: self.ssh.identity_file.as_deref().map(expand_home),
            sudo: self.ssh.sudo,
        }
    }
}
