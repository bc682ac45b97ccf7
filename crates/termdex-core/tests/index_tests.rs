// Rust guideline compliant 2026-10-14

//! Unit tests for the index builder.
//!
//! These tests validate concrete catalogs, edge cases, and error conditions
//! for search-term assignment.

use std::collections::BTreeMap;
use termdex_core::{
    build_index, build_index_with_stats, group_size, normalize_name, Corpus, Error,
};

/// Helper to build a corpus keyed by position starting at 1.
fn numbered(names: &[&str]) -> Corpus<u64> {
    Corpus::from_entries(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as u64 + 1, name.to_string())),
    )
    .expect("Failed to build corpus")
}

/// Asserts the invariants every assigned term must satisfy.
fn assert_terms_valid(corpus: &Corpus<u64>, max_candidates: usize) {
    let index = build_index(corpus, max_candidates).expect("Failed to build index");
    for (id, term) in index.iter() {
        let name = normalize_name(corpus.get(id).expect("Index id must be in corpus"));
        assert!(
            name.contains(term),
            "Term {:?} should be a substring of {:?}",
            term,
            name
        );
        if term != name {
            assert!(
                group_size(corpus, term) <= max_candidates,
                "Term {:?} leaves too many candidates",
                term
            );
        }
    }
}

#[test]
fn test_small_group_maps_to_empty_term() {
    let corpus = numbered(&["sword", "shield", "staff"]);
    let index = build_index(&corpus, 9).expect("Failed to build index");

    let expected: BTreeMap<u64, String> = [(1, ""), (2, ""), (3, "")]
        .into_iter()
        .map(|(id, term)| (id, term.to_string()))
        .collect();
    assert_eq!(index.into_terms(), expected);
}

#[test]
fn test_shared_first_letter_branches_deeper() {
    let names = [
        "aardvark", "abacus", "abbey", "acorn", "adder", "adze", "aegis", "afghan", "agate",
        "ahoy", "aisle", "ajar", "akimbo", "alder", "amber", "anvil", "apron", "aqua", "arrow",
        "ashes",
    ];
    let corpus = numbered(&names);
    let index = build_index(&corpus, 9).expect("Failed to build index");

    assert_eq!(index.len(), names.len(), "Every entity should get a term");
    for (_, term) in index.iter() {
        assert_ne!(term, "", "Root group of 20 exceeds the threshold");
        assert_ne!(term, "a", "Every name contains 'a'");
    }
    assert_terms_valid(&corpus, 9);
}

#[test]
fn test_repeated_occurrence_explores_both_branches() {
    let corpus = numbered(&["ab", "abab"]);
    let index = build_index(&corpus, 1).expect("Failed to build index");

    assert_eq!(index.get(&1), Some("ab"));
    assert_eq!(index.get(&2), Some("ba"));
    assert_terms_valid(&corpus, 1);
}

#[test]
fn test_case_insensitive_matching() {
    let corpus = numbered(&["Rune Platebody", "rune platelegs", "RUNE SCIMITAR"]);
    let index = build_index(&corpus, 1).expect("Failed to build index");

    assert_eq!(index.get(&1), Some("b"));
    assert_eq!(index.get(&2), Some("g"));
    assert_eq!(index.get(&3), Some("c"));
}

#[test]
fn test_name_contained_in_every_other_name() {
    let corpus = numbered(&["bar", "bronze bar", "iron bar", "steel bar", "mithril bar"]);
    let index = build_index(&corpus, 2).expect("Failed to build index");

    assert_eq!(index.get(&1), Some("bar"), "Exact name is the only way in");
    assert!(index.uncovered(&corpus).is_empty());
    assert_terms_valid(&corpus, 2);
}

#[test]
fn test_duplicate_names_share_a_term() {
    let corpus = Corpus::from_entries([(995u64, "Coins"), (617, "coins"), (1, "Cake"), (2, "Cape")])
        .expect("Failed to build corpus");
    let index = build_index(&corpus, 1).expect("Failed to build index");

    assert_eq!(index.get(&995), Some("coins"));
    assert_eq!(index.get(&617), Some("coins"));
    assert!(index.uncovered(&corpus).is_empty());
}

#[test]
fn test_threshold_is_recorded() {
    let corpus = numbered(&["logs", "oak logs"]);
    let index = build_index(&corpus, 3).expect("Failed to build index");
    assert_eq!(index.max_candidates(), 3);
}

#[test]
fn test_zero_threshold_is_precondition_violation() {
    let corpus = numbered(&["logs"]);
    let result = build_index(&corpus, 0);
    assert!(matches!(result, Err(Error::InvalidThreshold(0))));
}

#[test]
fn test_string_identifiers() {
    let corpus = Corpus::from_entries([
        ("rune_axe".to_string(), "Rune axe"),
        ("rune_arrow".to_string(), "Rune arrow"),
    ])
    .expect("Failed to build corpus");
    let index = build_index(&corpus, 1).expect("Failed to build index");

    assert_eq!(index.get(&"rune_axe".to_string()), Some("x"));
    assert_eq!(index.get(&"rune_arrow".to_string()), Some("o"));
}

#[test]
fn test_rebuild_is_deterministic() {
    let corpus = numbered(&["abab", "baba", "ab", "ba", "aabb"]);
    let first = build_index(&corpus, 1).expect("Failed to build index");
    let second = build_index(&corpus, 1).expect("Failed to build index");
    assert_eq!(first, second);
}

#[test]
fn test_long_shared_substring() {
    let shared = "a".repeat(10_000);
    let corpus = Corpus::from_entries([(1u64, format!("{}b", shared)), (2, format!("{}c", shared))])
        .expect("Failed to build corpus");

    let (index, stats) = build_index_with_stats(&corpus, 1).expect("Failed to build index");
    assert_eq!(index.get(&1), Some("b"));
    assert_eq!(index.get(&2), Some("c"));
    assert_eq!(stats.max_depth, shared.len() + 1);
}
