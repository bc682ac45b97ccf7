// Rust guideline compliant 2026-10-14

//! Command implementations for the Termdex CLI.

pub mod build;
pub mod init;
pub mod resolve;
pub mod search;
pub mod terms;
