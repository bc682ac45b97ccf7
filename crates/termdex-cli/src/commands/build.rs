// Rust guideline compliant 2026-10-14

//! Implementation of the `tdx build` command.
//!
//! Builds the search-term index for a catalog, reusing the cached index when
//! the catalog's identifier set and threshold are unchanged.

use crate::catalog::load_corpus;
use crate::output::{BuildSummary, OutputFormatter};
use crate::Workspace;
use anyhow::Result;
use std::path::Path;
use termdex_core::{CacheOutcome, Corpus, Error as CoreError, SearchIndex};

/// Builds or loads the index and reports coverage.
///
/// # Arguments
///
/// * `corpus_path` - Catalog JSON file
/// * `max_candidates` - Optional threshold override
/// * `force` - Discard the cached index before building
/// * `workspace` - Config directory and configuration
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The catalog cannot be loaded
/// - The threshold is zero
/// - The cache cannot be read or written
pub fn execute(
    corpus_path: &Path,
    max_candidates: Option<usize>,
    force: bool,
    workspace: &Workspace,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let (index, outcome) = load_index(&corpus, max_candidates, force, workspace)?;

    let summary = BuildSummary {
        entries: corpus.len(),
        covered: index.len(),
        uncovered: index.uncovered(&corpus),
        collisions: corpus.collisions().len(),
        max_candidates: index.max_candidates(),
        outcome,
        cache_path: workspace.index_cache().path().to_path_buf(),
    };
    println!("{}", formatter.format_summary(&summary));

    Ok(())
}

/// Loads the cached index for a corpus, rebuilding it under the cache lock when stale.
///
/// # Errors
///
/// Returns an error if the threshold is zero or the cache cannot be used.
pub fn load_index(
    corpus: &Corpus<u64>,
    max_candidates: Option<usize>,
    force: bool,
    workspace: &Workspace,
) -> Result<(SearchIndex<u64>, CacheOutcome)> {
    let max_candidates = workspace.max_candidates(max_candidates);
    if max_candidates == 0 {
        return Err(CoreError::InvalidThreshold(max_candidates).into());
    }
    let cache = workspace.index_cache();

    let result = cache.with_lock(|| {
        if force {
            cache.invalidate()?;
        }
        cache.load_or_build(corpus, max_candidates)
    })?;

    Ok(result)
}
