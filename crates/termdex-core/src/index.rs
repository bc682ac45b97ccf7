// Rust guideline compliant 2026-10-14

//! Search-term index builder.
//!
//! For every entity the builder finds the shortest substring of its name that
//! narrows the corpus down to at most `max_candidates` entries, or that equals
//! the name itself. Terms are grown one character at a time from the empty
//! string; each distinct next character opens a branch whose candidate set is
//! the subset of the parent's names that still contain the longer term.
//!
//! A name can contain a term several times with different following
//! characters, so it may be reached from several branches. When two branches
//! assign a term to the same name the shorter term wins; among terms of equal
//! length the lexicographically smaller one wins.

use crate::corpus::normalize_name;
use crate::{Corpus, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Mapping of entity identifiers to their assigned search terms.
///
/// Identifiers absent from the index have no short search term; callers fall
/// back to exact-name or identifier lookup for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Ord + Deserialize<'de>"
))]
pub struct SearchIndex<K> {
    max_candidates: usize,
    terms: BTreeMap<K, String>,
}

impl<K: Ord + Clone> SearchIndex<K> {
    /// Returns the candidate threshold the index was built with.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Returns the term assigned to an identifier.
    pub fn get(&self, id: &K) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// Returns true if the identifier has a term.
    pub fn contains(&self, id: &K) -> bool {
        self.terms.contains_key(id)
    }

    /// Returns the number of identifiers with a term.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no identifier has a term.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates `(identifier, term)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.terms.iter().map(|(id, term)| (id, term.as_str()))
    }

    /// Returns the corpus identifiers that received no term.
    pub fn uncovered(&self, corpus: &Corpus<K>) -> Vec<K> {
        corpus
            .identifiers()
            .filter(|id| !self.terms.contains_key(*id))
            .cloned()
            .collect()
    }

    /// Consumes the index and returns the underlying mapping.
    pub fn into_terms(self) -> BTreeMap<K, String> {
        self.terms
    }
}

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of branch nodes visited, root included.
    pub nodes: usize,
    /// Length in characters of the longest term explored.
    pub max_depth: usize,
}

/// Builds the search-term index for a corpus.
///
/// # Arguments
///
/// * `corpus` - Identifier to name mapping
/// * `max_candidates` - Largest candidate set a term may leave (K)
///
/// # Returns
///
/// The identifier to term mapping.
///
/// # Errors
///
/// Returns an error if `max_candidates` is zero.
pub fn build_index<K: Ord + Clone>(
    corpus: &Corpus<K>,
    max_candidates: usize,
) -> Result<SearchIndex<K>> {
    build_index_with_stats(corpus, max_candidates).map(|(index, _)| index)
}

/// Builds the search-term index and reports traversal counters.
///
/// # Errors
///
/// Returns an error if `max_candidates` is zero.
pub fn build_index_with_stats<K: Ord + Clone>(
    corpus: &Corpus<K>,
    max_candidates: usize,
) -> Result<(SearchIndex<K>, BuildStats)> {
    if max_candidates == 0 {
        return Err(Error::InvalidThreshold(max_candidates));
    }

    let groups = corpus.name_groups();
    for (name, ids) in groups.iter().filter(|(_, ids)| ids.len() > 1) {
        debug!(name = %name, count = ids.len(), "identifiers share a display name");
    }

    let roots: Vec<Candidate<'_>> = groups
        .iter()
        .map(|(name, ids)| Candidate::root(name, ids.len()))
        .collect();

    let mut builder = Builder {
        max_candidates,
        stats: BuildStats::default(),
    };
    let by_name = builder.run(roots);

    let mut terms = BTreeMap::new();
    for (name, ids) in &groups {
        if let Some(term) = by_name.get(name.as_str()) {
            for id in ids {
                terms.insert(id.clone(), term.clone());
            }
        }
    }

    let stats = builder.stats;
    debug!(
        entries = corpus.len(),
        covered = terms.len(),
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "built search-term index"
    );

    Ok((
        SearchIndex {
            max_candidates,
            terms,
        },
        stats,
    ))
}

/// A normalized name that contains the current term.
#[derive(Debug)]
struct Candidate<'a> {
    name: &'a str,
    /// Identifiers sharing this name.
    weight: usize,
    /// Byte offsets just past each occurrence of the current term.
    ends: Vec<usize>,
}

impl<'a> Candidate<'a> {
    /// The empty term occurs at every character boundary.
    fn root(name: &'a str, weight: usize) -> Self {
        let ends = name
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(name.len()))
            .collect();
        Self { name, weight, ends }
    }

    /// Splits the occurrences by the character that follows them.
    ///
    /// Occurrences at the end of the name have no follower and are dropped.
    fn branches(&self) -> Vec<(char, Self)> {
        let mut split: Vec<(char, Vec<usize>)> = Vec::new();
        for &end in &self.ends {
            if let Some(next) = self.name[end..].chars().next() {
                let after = end + next.len_utf8();
                match split.iter_mut().find(|(c, _)| *c == next) {
                    Some((_, ends)) => ends.push(after),
                    None => split.push((next, vec![after])),
                }
            }
        }

        split
            .into_iter()
            .map(|(c, ends)| {
                (
                    c,
                    Self {
                        name: self.name,
                        weight: self.weight,
                        ends,
                    },
                )
            })
            .collect()
    }
}

struct Builder {
    max_candidates: usize,
    stats: BuildStats,
}

/// A pending node of the term tree.
struct Frame<'a> {
    term: String,
    candidates: Vec<Candidate<'a>>,
    depth: usize,
}

impl Builder {
    /// Walks the term tree depth-first and returns the best term per name.
    ///
    /// Shared substrings make the tree as deep as the longest of them, so the
    /// walk keeps its own stack instead of recursing.
    fn run<'a>(&mut self, roots: Vec<Candidate<'a>>) -> BTreeMap<&'a str, String> {
        let mut assigned = BTreeMap::new();
        let mut pending = vec![Frame {
            term: String::new(),
            candidates: roots,
            depth: 0,
        }];

        while let Some(frame) = pending.pop() {
            self.visit(frame, &mut assigned, &mut pending);
        }

        assigned
    }

    fn visit<'a>(
        &mut self,
        frame: Frame<'a>,
        assigned: &mut BTreeMap<&'a str, String>,
        pending: &mut Vec<Frame<'a>>,
    ) {
        let Frame {
            term,
            candidates,
            depth,
        } = frame;

        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let group_size: usize = candidates.iter().map(|candidate| candidate.weight).sum();

        if group_size <= self.max_candidates {
            for candidate in &candidates {
                assign(assigned, candidate.name, term.clone());
            }
            return;
        }

        if let Some(exact) = candidates.iter().find(|candidate| candidate.name == term) {
            assign(assigned, exact.name, term.clone());
        }

        let mut children: BTreeMap<char, Vec<Candidate<'a>>> = BTreeMap::new();
        for candidate in &candidates {
            for (c, child) in candidate.branches() {
                children.entry(c).or_default().push(child);
            }
        }

        // Reversed so the smallest character is popped first.
        for (c, narrowed) in children.into_iter().rev() {
            let mut child_term = String::with_capacity(term.len() + c.len_utf8());
            child_term.push_str(&term);
            child_term.push(c);

            pending.push(Frame {
                term: child_term,
                candidates: narrowed,
                depth: depth + 1,
            });
        }
    }
}

fn assign<'a>(assigned: &mut BTreeMap<&'a str, String>, name: &'a str, term: String) {
    match assigned.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert(term);
        }
        Entry::Occupied(mut slot) => {
            if is_preferred(&term, slot.get()) {
                slot.insert(term);
            }
        }
    }
}

/// Shorter wins; equal lengths fall back to lexicographic order.
fn is_preferred(candidate: &str, current: &str) -> bool {
    (candidate.chars().count(), candidate) < (current.chars().count(), current)
}

/// Counts the corpus entries whose normalized name contains `term`.
///
/// This is the candidate set a user sees after typing `term`.
pub fn group_size<K: Ord + Clone>(corpus: &Corpus<K>, term: &str) -> usize {
    let needle = normalize_name(term);
    corpus
        .iter()
        .filter(|(_, name)| normalize_name(name).contains(&needle))
        .count()
}
