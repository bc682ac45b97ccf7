// Rust guideline compliant 2026-10-14

//! Implementation of the `tdx search` command.

use crate::catalog::load_corpus;
use crate::output::{EntityMatch, OutputFormatter};
use anyhow::Result;
use std::path::Path;
use termdex_core::Resolver;

/// Lists the entities whose name contains a term.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn execute(corpus_path: &Path, term: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let matches: Vec<EntityMatch> = Resolver::new(&corpus)
        .search(term)
        .into_iter()
        .map(|id| EntityMatch {
            id,
            name: corpus.get(&id).unwrap_or_default().to_string(),
        })
        .collect();

    println!("{}", formatter.format_search(term, &matches));

    Ok(())
}
