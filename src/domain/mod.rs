//! Domain Layer
//!
//! Connector synchronization logic, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - StagedFile, ActionReport
//! - `value_objects/` - ConnectorName, Host, DeployTarget
//! - `services/` - ConnectorCatalog, FanOutDeployer
//! - `ports/` - RemoteExecutor, LocalFileSystem, DiagnosticSink
//!
//! All I/O goes through the trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
