//! Coordinator configuration reader
//!
//! Reads `config.properties` from the coordinator and answers how clients
//! should reach it. Missing or unreadable configuration falls back to the
//! query engine's defaults.

use tracing::info;

use crate::domain::ports::RemoteExecutor;
use crate::domain::value_objects::{join_remote, Host};
use crate::error::{AdminError, AdminResult};
use crate::properties::{self, Properties};

pub const CONFIG_PROPERTIES: &str = "config.properties";

pub const HTTP_ENABLED_KEY: &str = "http-server.http.enabled";
pub const HTTPS_ENABLED_KEY: &str = "http-server.https.enabled";
pub const HTTP_PORT_KEY: &str = "http-server.http.port";
pub const HTTPS_PORT_KEY: &str = "http-server.https.port";

fn default_value(key: &str) -> Option<&'static str> {
    match key {
        HTTP_ENABLED_KEY => Some("true"),
        HTTPS_ENABLED_KEY => Some("false"),
        HTTP_PORT_KEY => Some("8080"),
        HTTPS_PORT_KEY => Some("8443"),
        _ => None,
    }
}

/// Coordinator `config.properties`, with engine defaults behind it
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    properties: Properties,
    host: Host,
    path: String,
}

impl CoordinatorConfig {
    /// Read the coordinator's config; any failure means defaults
    pub fn fetch<RE: RemoteExecutor>(executor: &RE, coordinator: &Host, conf_dir: &str) -> Self {
        let path = join_remote(conf_dir, CONFIG_PROPERTIES);
        let properties = match executor.read_file(coordinator, &path) {
            Ok(content) => properties::parse(&content),
            Err(e) => {
                info!(host = %coordinator, "Could not find coordinator config: {}", e);
                Properties::new()
            }
        };
        Self::new(properties, coordinator.clone(), path)
    }

    pub fn new(properties: Properties, host: Host, path: impl Into<String>) -> Self {
        Self {
            properties,
            host,
            path: path.into(),
        }
    }

    /// Configured value, else the default, else an error
    pub fn lookup(&self, key: &str) -> AdminResult<&str> {
        if let Some(value) = self.properties.get(key).filter(|v| !v.is_empty()) {
            return Ok(value.as_str());
        }
        default_value(key).ok_or_else(|| {
            AdminError::Configuration(format!(
                "Key {} is not configured in coordinator configuration {} on host {} and has no default",
                key, self.path, self.host
            ))
        })
    }

    fn lookup_bool(&self, key: &str) -> AdminResult<bool> {
        Ok(self.lookup(key)? == "true")
    }

    fn lookup_port(&self, key: &str) -> AdminResult<u16> {
        let value = self.lookup(key)?;
        value.trim().parse().map_err(|_| {
            AdminError::Configuration(format!(
                "Invalid port '{}' for {} in {} on host {}",
                value, key, self.path, self.host
            ))
        })
    }

    /// Clients must use HTTPS when HTTPS is on and plain HTTP is off
    pub fn use_https(&self) -> AdminResult<bool> {
        let http = self.lookup_bool(HTTP_ENABLED_KEY)?;
        let https = self.lookup_bool(HTTPS_ENABLED_KEY)?;
        Ok(https && !http)
    }

    pub fn http_port(&self) -> AdminResult<u16> {
        self.lookup_port(HTTP_PORT_KEY)
    }

    pub fn https_port(&self) -> AdminResult<u16> {
        self.lookup_port(HTTPS_PORT_KEY)
    }

    /// `scheme://coordinator:port`
    pub fn endpoint(&self) -> AdminResult<String> {
        if self.use_https()? {
            Ok(format!("https://{}:{}", self.host.address(), self.https_port()?))
        } else {
            Ok(format!("http://{}:{}", self.host.address(), self.http_port()?))
        }
    }
}
