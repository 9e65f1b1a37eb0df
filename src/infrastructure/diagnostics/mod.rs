//! Diagnostic sinks
//!
//! Concrete implementations of the DiagnosticSink port.

mod stderr;

pub use stderr::{render_warning, StderrSink};
