// Rust guideline compliant 2026-10-14

//! Error types for the Termdex core library.

use thiserror::Error;

/// Result type alias for Termdex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Termdex operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The corpus violates a precondition of the index builder.
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    /// The candidate threshold must be at least 1.
    #[error("Invalid max_candidates: {0} (must be at least 1)")]
    InvalidThreshold(usize),

    /// No entity matches the given input.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// The input matched more than one entity.
    #[error("Ambiguous input: {0} matches {1:?}")]
    AmbiguousName(String, Vec<String>),

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
