// Rust guideline compliant 2026-10-14

//! Corpus model: the identifier to display-name mapping the index is built from.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// One record of the remote item catalog.
///
/// The catalog carries many more fields per item; only the identifier and the
/// display name are kept, unknown fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Numeric item identifier.
    pub id: u64,
    /// Display name of the item.
    pub name: String,
}

/// Folds a display name into the form used for all matching.
///
/// Every comparison in this crate is case-insensitive; this is the single rule
/// that defines what that means.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// A validated mapping of entity identifiers to display names.
///
/// Names keep their original casing; matching always goes through
/// [`normalize_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus<K> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord + Clone> Corpus<K> {
    /// Creates a corpus from an identifier to name mapping.
    ///
    /// Leading and trailing whitespace is stripped from every name, so a
    /// name matches exactly the text a user would type for it.
    ///
    /// # Arguments
    ///
    /// * `entries` - Identifier to display name mapping
    ///
    /// # Returns
    ///
    /// The validated corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mapping is empty
    /// - Any name is empty or whitespace-only
    pub fn new(entries: BTreeMap<K, String>) -> Result<Self>
    where
        K: Display,
    {
        if entries.is_empty() {
            return Err(Error::InvalidCorpus(
                "Corpus must contain at least one entry".to_string(),
            ));
        }

        let entries: BTreeMap<K, String> = entries
            .into_iter()
            .map(|(id, name)| (id, name.trim().to_string()))
            .collect();

        if let Some((id, _)) = entries.iter().find(|(_, name)| name.is_empty()) {
            return Err(Error::InvalidCorpus(format!(
                "Entry {} has an empty name",
                id
            )));
        }

        Ok(Self { entries })
    }

    /// Creates a corpus from `(identifier, name)` pairs.
    ///
    /// A repeated identifier keeps the last name seen.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Corpus::new`].
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        K: Display,
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        )
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the corpus has no entries. Never true for a validated corpus.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the display name for an identifier.
    pub fn get(&self, id: &K) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Returns true if the identifier is part of the corpus.
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterates entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Iterates identifiers in order.
    pub fn identifiers(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Groups identifiers by normalized name.
    ///
    /// Every identifier appears in exactly one group. Identifiers inside a group
    /// are in ascending order.
    pub fn name_groups(&self) -> BTreeMap<String, Vec<K>> {
        let mut groups: BTreeMap<String, Vec<K>> = BTreeMap::new();
        for (id, name) in &self.entries {
            groups
                .entry(normalize_name(name))
                .or_default()
                .push(id.clone());
        }
        groups
    }

    /// Returns the normalized names shared by two or more identifiers.
    ///
    /// These entities cannot be told apart by name; the index assigns every one
    /// of them the same term.
    pub fn collisions(&self) -> BTreeMap<String, Vec<K>> {
        self.name_groups()
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .collect()
    }
}

impl Corpus<u64> {
    /// Creates a corpus from catalog records.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Corpus::new`].
    pub fn from_catalog(entries: Vec<CatalogEntry>) -> Result<Self> {
        Self::from_entries(entries.into_iter().map(|entry| (entry.id, entry.name)))
    }
}
