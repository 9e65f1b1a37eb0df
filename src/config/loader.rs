//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AdminError, AdminResult};

use super::types::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CONNECTOR_ADMIN_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Parse TOML text, collecting unknown keys
pub fn parse_with_warnings(content: &str, path: &Path) -> AdminResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AdminError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AdminResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AdminError::ConfigFileNotFound(format!(
            "Configuration file {} does not exist",
            path.display()
        )),
        _ => AdminError::Io(e),
    })?;
    parse_with_warnings(&content, path)
}

/// `<config dir>/connector-admin/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("connector-admin").join("config.toml"))
}

/// Resolve and load the active configuration, then apply env overrides.
///
/// An explicit path (flag or env) must exist; the user config is optional.
pub fn discover(explicit: Option<&Path>) -> AdminResult<(Config, Vec<ConfigWarning>)> {
    let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let required = explicit.map(Path::to_path_buf).or(from_env);

    let (config, warnings) = match required {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => match user_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => {
                debug!("no config file found, using defaults");
                (Config::default(), Vec::new())
            }
        },
    };

    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (CONNECTOR_ADMIN_* prefix)
pub fn with_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // CONNECTOR_ADMIN_USER
    if let Some(user) = var("CONNECTOR_ADMIN_USER").filter(|u| !u.is_empty()) {
        config.cluster.user = user;
    }

    // CONNECTOR_ADMIN_PORT (ignored when unparsable)
    if let Some(port) = var("CONNECTOR_ADMIN_PORT").and_then(|p| p.trim().parse().ok()) {
        config.cluster.port = port;
    }

    // CONNECTOR_ADMIN_CONNECTORS_DIR
    if let Some(dir) = var("CONNECTOR_ADMIN_CONNECTORS_DIR").filter(|d| !d.is_empty()) {
        config.paths.connectors_dir = PathBuf::from(dir);
    }

    // CONNECTOR_ADMIN_PARALLEL
    if let Some(val) = var("CONNECTOR_ADMIN_PARALLEL") {
        config.ssh.parallel = !matches!(val.to_lowercase().as_str(), "false" | "0" | "");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cluster",
        "user",
        "port",
        "coordinator",
        "workers",
        "paths",
        "connectors_dir",
        "catalog_dir",
        "conf_dir",
        "ssh",
        "connect_timeout",
        "identity_file",
        "sudo",
        "parallel",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = Vec::with_capacity(b.len() + 1);
        curr.push(i + 1);
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != *bc);
            curr.push((prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost));
        }
        prev = curr;
    }

    prev[b.len()]
}
