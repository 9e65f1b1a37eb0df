//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `output` - JSON events, summaries and error text

pub mod cli;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, ConnectorAction, CoordinatorAction};

/// Decide whether to color stderr output
pub fn use_color(when: Option<ColorWhen>, stderr_is_terminal: bool) -> bool {
    match when.unwrap_or_default() {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => stderr_is_terminal && std::env::var_os("NO_COLOR").is_none(),
    }
}
