// Rust guideline compliant 2026-10-14

//! Response envelopes and stable error codes for JSON output.

use serde::Serialize;
use termdex_core::Error as CoreError;

/// Stable error codes for JSON error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The input matched no entity.
    NotFound,
    /// The input matched multiple entities.
    AmbiguousName,
    /// The catalog violates a precondition.
    InvalidCorpus,
    /// The candidate threshold is out of range.
    InvalidThreshold,
    /// Configuration is invalid.
    InvalidConfig,
    /// IO failure while reading or writing files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// A fallback for unexpected errors.
    Unknown,
}

impl ErrorCode {
    /// Maps an error chain to its stable code.
    #[must_use]
    pub fn of(error: &anyhow::Error) -> Self {
        if let Some(core) = error.downcast_ref::<CoreError>() {
            return match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousName(_, _) => ErrorCode::AmbiguousName,
                CoreError::InvalidCorpus(_) => ErrorCode::InvalidCorpus,
                CoreError::InvalidThreshold(_) => ErrorCode::InvalidThreshold,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            };
        }
        if error.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorCode::JsonError;
        }
        if error.downcast_ref::<std::io::Error>().is_some() {
            return ErrorCode::IoError;
        }
        ErrorCode::Unknown
    }
}

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: "ok",
            result,
        }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an error chain.
    #[must_use]
    pub fn from_error(error: &anyhow::Error) -> Self {
        let details = match error.downcast_ref::<CoreError>() {
            Some(CoreError::AmbiguousName(input, matches)) => Some(serde_json::json!({
                "input": input,
                "matches": matches,
            })),
            _ => None,
        };

        Self {
            code: ErrorCode::of(error),
            message: format!("{:#}", error),
            details,
        }
    }
}
