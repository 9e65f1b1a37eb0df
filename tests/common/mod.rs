//! Common test utilities for connector-admin CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a temp config, staging dir and HOME
//! - Fixtures: Reusable connector and config content

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
