//! Diagnostic Sink Port
//!
//! The stream per-host warnings are written to.

use crate::domain::value_objects::Host;

/// Receives user-facing warnings
pub trait DiagnosticSink: Send + Sync {
    /// Emit one warning, optionally attributed to a host
    fn warn(&self, host: Option<&Host>, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn warn(&self, host: Option<&Host>, message: &str) {
        (**self).warn(host, message)
    }
}
