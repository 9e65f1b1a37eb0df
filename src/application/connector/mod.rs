//! Connector Module
//!
//! - `options` - `ConnectorOptions`
//! - `service` - `ConnectorService` (`add`, `remove`)
//!
//! ## Usage
//!
//! ```ignore
//! use connector_admin::application::connector::{ConnectorOptions, ConnectorService};
//!
//! let service = ConnectorService::new(fs, executor, sink, hosts, options);
//! service.add(Some("tpch"))?;
//! ```

mod options;
mod service;

pub use options::ConnectorOptions;
pub use service::ConnectorService;
