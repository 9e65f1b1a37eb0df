//! Output Rendering
//!
//! Reports go to stdout (one JSON object per line with `--json`); warnings
//! and errors go to stderr.

use std::io::{self, Write};

use crossterm::style::Stylize;
use serde_json::{json, Value};

use crate::domain::entities::ActionReport;

/// Overall status of a fan-out: `success` when every host succeeded
pub fn report_status(report: &ActionReport) -> &'static str {
    if report.is_success() {
        "success"
    } else {
        "partial"
    }
}

/// JSON event for a completed connector action
pub fn report_event(command: &str, report: &ActionReport) -> Value {
    json!({
        "event": "complete",
        "command": command,
        "status": report_status(report),
        "hosts": report.iter().collect::<Vec<_>>(),
    })
}

/// JSON event for the coordinator endpoint
pub fn endpoint_event(endpoint: &str) -> Value {
    json!({
        "event": "complete",
        "command": "coordinator endpoint",
        "endpoint": endpoint,
    })
}

/// JSON event for a fatal error
pub fn error_event(message: &str) -> Value {
    json!({
        "event": "error",
        "message": message,
    })
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// One-line text summary of a report
pub fn summary_line(command: &str, report: &ActionReport) -> String {
    let total = report.len();
    let ok = report.iter().filter(|r| r.outcome.is_success()).count();
    format!(
        "{}: {}/{} hosts succeeded ({} soft, {} hard failures)",
        command,
        ok,
        total,
        report.soft_failures(),
        report.hard_failures()
    )
}

/// Fatal error text for stderr
pub fn render_error(message: &str, color: bool) -> String {
    let label = if color {
        "[ERROR]".red().bold().to_string()
    } else {
        "[ERROR]".to_string()
    };
    format!("{} {}\n", label, message)
}
