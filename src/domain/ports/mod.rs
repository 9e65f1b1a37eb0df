//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod diagnostics;
pub mod local_fs;
pub mod remote_executor;

#[cfg(test)]
pub(crate) mod mock;

pub use diagnostics::DiagnosticSink;
pub use local_fs::{ListError, LocalFileSystem};
pub use remote_executor::{CommandOutcome, RemoteError, RemoteExecutor};
