// Rust guideline compliant 2026-10-14

//! Resolution of user input to a single corpus identifier.
//!
//! Input is tried, in order, as an identifier, as a full name and finally as a
//! search term that must narrow the corpus to exactly one entity.

use crate::corpus::normalize_name;
use crate::{Corpus, Error, Result};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Resolves identifiers, names and search terms against a corpus.
#[derive(Debug, Clone)]
pub struct Resolver<'a, K> {
    corpus: &'a Corpus<K>,
    names: BTreeMap<String, Vec<K>>,
    normalized: Vec<(K, String)>,
}

impl<'a, K> Resolver<'a, K>
where
    K: Ord + Clone + FromStr + Display,
{
    /// Creates a resolver over a corpus.
    pub fn new(corpus: &'a Corpus<K>) -> Self {
        let normalized = corpus
            .iter()
            .map(|(id, name)| (id.clone(), normalize_name(name)))
            .collect();

        Self {
            corpus,
            names: corpus.name_groups(),
            normalized,
        }
    }

    /// Resolves user input to a single identifier.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier, full name or search term (case-insensitive)
    ///
    /// # Returns
    ///
    /// The identifier the input designates.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is empty or matches nothing
    /// - The input is a name shared by several identifiers
    /// - The input is a term contained in several names
    pub fn resolve(&self, input: &str) -> Result<K> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::NotFound(input.to_string()));
        }

        if let Ok(id) = input.parse::<K>() {
            if self.corpus.contains(&id) {
                return Ok(id);
            }
        }

        if let Some(ids) = self.names.get(&normalize_name(input)) {
            return single(input, ids.clone());
        }

        single(input, self.search(input))
    }

    /// Returns the identifiers whose name contains `term`, in identifier order.
    pub fn search(&self, term: &str) -> Vec<K> {
        let needle = normalize_name(term.trim());
        self.normalized
            .iter()
            .filter(|(_, name)| name.contains(&needle))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

fn single<K: Display>(input: &str, mut ids: Vec<K>) -> Result<K> {
    match ids.len() {
        0 => Err(Error::NotFound(input.to_string())),
        1 => Ok(ids.remove(0)),
        _ => Err(Error::AmbiguousName(
            input.to_string(),
            ids.iter().map(ToString::to_string).collect(),
        )),
    }
}
