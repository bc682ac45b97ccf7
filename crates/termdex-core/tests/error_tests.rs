// Rust guideline compliant 2026-10-14

//! Unit tests for error types and messages.

use termdex_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.contains("JSON error"), "JSON error should contain 'JSON error' prefix");
}

#[test]
fn test_invalid_corpus_formatting() {
    let error = Error::InvalidCorpus("Entry #3 has an empty name".to_string());
    assert_eq!(error.to_string(), "Invalid corpus: Entry #3 has an empty name");
}

#[test]
fn test_invalid_threshold_formatting() {
    let msg = Error::InvalidThreshold(0).to_string();
    assert_eq!(msg, "Invalid max_candidates: 0 (must be at least 1)");
}

#[test]
fn test_not_found_formatting() {
    let msg = Error::NotFound("dragon".to_string()).to_string();
    assert_eq!(msg, "Entity not found: dragon");
}

#[test]
fn test_ambiguous_name_formatting() {
    let error = Error::AmbiguousName(
        "cannon".to_string(),
        vec!["2".to_string(), "6".to_string()],
    );
    let msg = error.to_string();
    assert!(msg.contains("cannon"), "Should include the input");
    assert!(msg.contains("\"2\"") && msg.contains("\"6\""), "Should list all matches");
}

#[test]
fn test_invalid_config_formatting() {
    let msg = Error::InvalidConfig("max_candidates must be greater than 0".to_string()).to_string();
    assert!(msg.starts_with("Invalid config:"));
}

#[test]
fn test_io_error_conversion() {
    fn read_missing() -> termdex_core::Result<String> {
        Ok(std::fs::read_to_string("/nonexistent/termdex/path")?)
    }
    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
