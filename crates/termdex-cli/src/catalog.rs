// Rust guideline compliant 2026-10-14

//! Loading of catalog files into a corpus.

use anyhow::{Context, Result};
use std::path::Path;
use termdex_core::{CatalogEntry, Corpus};

/// Reads a catalog file into a corpus.
///
/// The file holds a JSON array of catalog records, each with at least an
/// `id` and a `name`; other fields are ignored.
///
/// # Arguments
///
/// * `path` - Path to the catalog JSON file
///
/// # Returns
///
/// The validated corpus.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not a JSON array of catalog records
/// - The catalog is empty or contains an empty name
pub fn load_corpus(path: &Path) -> Result<Corpus<u64>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = entries.len(), "loaded catalog");
    Ok(Corpus::from_catalog(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_corpus() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"[{"id": 1511, "name": "Logs", "value": 4}, {"id": 1521, "name": "Oak logs"}]"#,
        )
        .unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(&1521), Some("Oak logs"));
    }

    #[test]
    fn test_load_corpus_rejects_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(&path, "[]").unwrap();

        let err = load_corpus(&path).unwrap_err();
        assert!(err.downcast_ref::<termdex_core::Error>().is_some());
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_corpus(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
