// Rust guideline compliant 2026-10-14

//! Implementation of the `tdx init` command.
//!
//! Creates the config directory and writes a default `config.toml` into it.

use crate::output::OutputFormatter;
use crate::Workspace;
use anyhow::{Context, Result};
use std::fs;
use termdex_core::Config;

/// Initializes the config directory.
///
/// An existing `config.toml` is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The config directory cannot be created
/// - The configuration file cannot be written
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<()> {
    let config_dir = workspace.config_dir();
    fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let config_path = config_dir.join("config.toml");
    let created = !config_path.exists();
    if created {
        Config::default().save(config_dir)?;
        tracing::info!(path = %config_path.display(), "wrote default config");
    }

    println!("{}", formatter.format_init(&config_path, created));

    Ok(())
}
