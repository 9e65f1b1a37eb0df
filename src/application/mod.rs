//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConnectorService` - add/remove connectors across the cluster
//! - `CoordinatorConfig` - how clients reach the coordinator

pub mod connector;
pub mod coordinator;

pub use connector::{ConnectorOptions, ConnectorService};
pub use coordinator::CoordinatorConfig;
