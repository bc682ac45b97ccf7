// Rust guideline compliant 2026-10-14

//! Tracing setup for the CLI.
//!
//! Logs go to stderr so that stdout carries only command output.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level (error, warn, info, debug)
/// * `json` - Emit JSON log lines instead of human-readable ones
///
/// # Errors
///
/// Returns an error if the level is not recognized.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {}", other),
    }
}
