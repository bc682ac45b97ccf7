// Rust guideline compliant 2026-10-14

//! Termdex CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod catalog;
pub mod commands;
pub mod logging;
pub mod output;
pub mod response;
pub mod workspace;

pub use output::{create_formatter, OutputFormatter};
pub use workspace::Workspace;
