// Rust guideline compliant 2026-10-14

//! Implementation of the `tdx terms` command.

use crate::catalog::load_corpus;
use crate::commands::build::load_index;
use crate::output::{OutputFormatter, TermRow};
use crate::Workspace;
use anyhow::Result;
use std::path::Path;

/// Lists every catalog entry with its search term.
///
/// Entries without a term are listed too, so the caller can fall back to the
/// full name or identifier for them.
///
/// # Errors
///
/// Returns an error if the catalog or the index cannot be loaded.
pub fn execute(
    corpus_path: &Path,
    max_candidates: Option<usize>,
    workspace: &Workspace,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let (index, _) = load_index(&corpus, max_candidates, false, workspace)?;

    let rows = TermRow::collect(&corpus, &index);
    println!("{}", formatter.format_terms(&rows));

    Ok(())
}
