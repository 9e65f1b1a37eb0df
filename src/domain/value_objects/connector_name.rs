//! ConnectorName value object - validated connector identifier

use std::fmt;

use crate::error::{AdminError, AdminResult};

/// File extension of a staged connector configuration
pub const PROPERTIES_EXTENSION: &str = "properties";

/// Name of a connector, as it appears in `<name>.properties`.
///
/// Names are case-sensitive. They end up inside remote paths and shell
/// scripts, so only `[A-Za-z0-9._-]` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectorName(String);

impl ConnectorName {
    /// Parse and validate a connector name
    pub fn parse(name: impl Into<String>) -> AdminResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AdminError::Configuration(
                "Connector name must not be empty".to_string(),
            ));
        }
        if name == "." || name == ".." {
            return Err(AdminError::Configuration(format!(
                "Invalid connector name '{}'",
                name
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(AdminError::Configuration(format!(
                "Invalid connector name '{}': character '{}' is not allowed",
                name, bad
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<name>.properties`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, PROPERTIES_EXTENSION)
    }
}

impl fmt::Display for ConnectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConnectorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
