//! Configuration module for connector-admin
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CONNECTOR_ADMIN_*)
//! 3. `--config` file, else `$CONNECTOR_ADMIN_CONFIG`, else the user config
//!    (`<config dir>/connector-admin/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, CONFIG_ENV};
pub use types::{ClusterConfig, Config, PathsConfig, SshConfig};
