// Rust guideline compliant 2026-10-14

//! Implementation of the `tdx resolve` command.
//!
//! Accepts an identifier, a full name, or a search term and reports the single
//! entity it designates.

use crate::catalog::load_corpus;
use crate::output::{EntityMatch, OutputFormatter};
use anyhow::Result;
use std::path::Path;
use termdex_core::Resolver;

/// Resolves user input to one catalog entity.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog cannot be loaded
/// - The input matches no entity
/// - The input matches several entities
pub fn execute(corpus_path: &Path, input: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let id = Resolver::new(&corpus).resolve(input)?;

    let entity = EntityMatch {
        id,
        name: corpus.get(&id).unwrap_or_default().to_string(),
    };
    println!("{}", formatter.format_resolution(input, &entity));

    Ok(())
}
