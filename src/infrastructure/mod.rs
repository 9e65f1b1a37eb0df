//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (staged connector files)
//! - `remote/` - SSH/SCP remote executor
//! - `diagnostics/` - Warning sink rendering to stderr

pub mod diagnostics;
pub mod fs;
pub mod remote;

// Re-export for convenience
pub use diagnostics::StderrSink;
pub use fs::{expand_home, LocalFs};
pub use remote::{SshExecutor, SshSettings};
