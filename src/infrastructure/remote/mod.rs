//! Remote Execution
//!
//! Concrete implementations of the RemoteExecutor port.

mod ssh;

pub use ssh::{SshExecutor, SshSettings};
