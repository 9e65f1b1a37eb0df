//! Logging and tracing initialization
//!
//! Diagnostics go to stderr so stdout stays clean for `--json`.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{AdminError, AdminResult};

/// Map `-v` occurrences to a level
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Default filter directive when `RUST_LOG` is unset
pub fn default_directive(verbose: u8) -> String {
    format!(
        "connector_admin={}",
        level_for_verbosity(verbose).as_str().to_ascii_lowercase()
    )
}

/// Initialize stderr logging. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8, ansi: bool) -> AdminResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| AdminError::Configuration(format!("Failed to create log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbose >= 2)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AdminError::Configuration(format!("Failed to initialize logging: {}", e)))
}
