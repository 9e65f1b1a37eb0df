//! connector-admin - connector configuration management for query engine clusters
//!
//! Keeps the connector `.properties` files staged on the admin machine in
//! step with the catalog directory on every cluster host, over SSH. Every
//! host is attempted; per-host failures become warnings instead of aborting
//! the rest of the cluster.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod properties;

// Re-exports for convenience
pub use application::{ConnectorOptions, ConnectorService, CoordinatorConfig};
pub use config::Config;
pub use domain::entities::{ActionReport, HostOutcome, HostReport, StagedFile};
pub use domain::ports::{DiagnosticSink, LocalFileSystem, RemoteError, RemoteExecutor};
pub use domain::services::ExecutionMode;
pub use domain::value_objects::{ConnectorName, Host};
pub use error::{AdminError, AdminResult};
