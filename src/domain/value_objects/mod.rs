//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod connector_name;
mod host;

pub use connector_name::{ConnectorName, PROPERTIES_EXTENSION};
pub use host::{join_remote, DeployTarget, Host, DEFAULT_SSH_PORT};
