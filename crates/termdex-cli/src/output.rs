// Rust guideline compliant 2026-10-14

//! Output formatting module for the Termdex CLI.
//!
//! Results are rendered either as JSON envelopes for machine consumption or
//! as tab-separated plain lines.

use crate::response::{ErrorEnvelope, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use termdex_core::{CacheOutcome, Corpus, SearchIndex};

/// One entity with its assigned term, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRow {
    /// Entity identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Assigned search term; `None` when the entity has no short term.
    pub term: Option<String>,
}

impl TermRow {
    /// Lists every corpus entry alongside its term.
    #[must_use]
    pub fn collect(corpus: &Corpus<u64>, index: &SearchIndex<u64>) -> Vec<Self> {
        corpus
            .iter()
            .map(|(id, name)| Self {
                id: *id,
                name: name.to_string(),
                term: index.get(id).map(str::to_string),
            })
            .collect()
    }
}

/// One corpus entry matched by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMatch {
    /// Entity identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// Counts reported after building or loading an index.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    /// Number of corpus entries.
    pub entries: usize,
    /// Entries with a term.
    pub covered: usize,
    /// Entries without a term.
    pub uncovered: Vec<u64>,
    /// Names shared by several identifiers.
    pub collisions: usize,
    /// Candidate threshold in effect.
    pub max_candidates: usize,
    /// Whether the cache was reused.
    pub outcome: CacheOutcome,
    /// Location of the cache file.
    pub cache_path: PathBuf,
}

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different formats.
pub trait OutputFormatter {
    /// Formats the outcome of an index build.
    fn format_summary(&self, summary: &BuildSummary) -> String;

    /// Formats the result of initializing the config directory.
    fn format_init(&self, config_path: &Path, created: bool) -> String;

    /// Formats the full term listing.
    fn format_terms(&self, rows: &[TermRow]) -> String;

    /// Formats a single resolved entity.
    fn format_resolution(&self, input: &str, entity: &EntityMatch) -> String;

    /// Formats the entities matched by a search term.
    fn format_search(&self, term: &str, matches: &[EntityMatch]) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(value))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &BuildSummary) -> String {
        Self::render(summary)
    }

    fn format_init(&self, config_path: &Path, created: bool) -> String {
        Self::render(json!({
            "config_path": config_path.display().to_string(),
            "created": created,
        }))
    }

    fn format_terms(&self, rows: &[TermRow]) -> String {
        Self::render(json!({
            "terms": rows,
            "total": rows.len(),
        }))
    }

    fn format_resolution(&self, input: &str, entity: &EntityMatch) -> String {
        Self::render(json!({
            "input": input,
            "id": entity.id,
            "name": entity.name,
        }))
    }

    fn format_search(&self, term: &str, matches: &[EntityMatch]) -> String {
        Self::render(json!({
            "term": term,
            "matches": matches,
            "total": matches.len(),
        }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_summary(&self, summary: &BuildSummary) -> String {
        let outcome = match summary.outcome {
            CacheOutcome::Hit => "reused cached index",
            CacheOutcome::Rebuilt => "rebuilt index",
        };
        let mut out = format!(
            "{} ({})\nentries: {}\ncovered: {}\nuncovered: {}\ncollisions: {}\nmax_candidates: {}",
            outcome,
            summary.cache_path.display(),
            summary.entries,
            summary.covered,
            summary.uncovered.len(),
            summary.collisions,
            summary.max_candidates,
        );
        if !summary.uncovered.is_empty() {
            let ids: Vec<String> = summary.uncovered.iter().map(u64::to_string).collect();
            out.push_str(&format!("\nwithout term: {}", ids.join(", ")));
        }
        out
    }

    fn format_init(&self, config_path: &Path, created: bool) -> String {
        if created {
            format!("Wrote default config to {}", config_path.display())
        } else {
            format!("Config already exists at {}", config_path.display())
        }
    }

    fn format_terms(&self, rows: &[TermRow]) -> String {
        rows.iter()
            .map(|row| match &row.term {
                Some(term) => format!("{}\t{}\t{:?}", row.id, row.name, term),
                None => format!("{}\t{}\t-", row.id, row.name),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_resolution(&self, _input: &str, entity: &EntityMatch) -> String {
        format!("{}\t{}", entity.id, entity.name)
    }

    fn format_search(&self, term: &str, matches: &[EntityMatch]) -> String {
        if matches.is_empty() {
            return format!("No entities match {:?}", term);
        }
        matches
            .iter()
            .map(|entity| format!("{}\t{}", entity.id, entity.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Creates the formatter for a JSON flag.
#[must_use]
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
