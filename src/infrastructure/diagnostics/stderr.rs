//! Stderr warning sink
//!
//! Per-host warnings render as a blank line, `Warning: [host] message`,
//! then another blank line. Colour only touches the `Warning:` label.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::DiagnosticSink;
use crate::domain::value_objects::Host;

/// Render one warning block
pub fn render_warning(host: Option<&Host>, message: &str, color: bool) -> String {
    let label = if color {
        "Warning:".yellow().bold().to_string()
    } else {
        "Warning:".to_string()
    };
    match host {
        Some(host) => format!("\n{} [{}] {}\n\n", label, host, message),
        None => format!("\n{} {}\n\n", label, message),
    }
}

/// DiagnosticSink writing to a byte stream, stderr by default.
///
/// Writes are serialized so warnings from parallel hosts never interleave.
pub struct StderrSink<W: Write + Send = io::Stderr> {
    writer: Mutex<W>,
    color: bool,
}

impl StderrSink {
    pub fn new(color: bool) -> Self {
        Self::with_writer(io::stderr(), color)
    }
}

impl<W: Write + Send> StderrSink<W> {
    pub fn with_writer(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
        }
    }

    /// Take back the underlying writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DiagnosticSink for StderrSink<W> {
    fn warn(&self, host: Option<&Host>, message: &str) {
        let rendered = render_warning(host, message, self.color);
        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A closed stderr leaves nowhere to report to
        let _ = writer.write_all(rendered.as_bytes());
        let _ = writer.flush();
    }
}
