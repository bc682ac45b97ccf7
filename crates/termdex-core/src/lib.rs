// Rust guideline compliant 2026-10-14

//! Termdex Core Library
//!
//! This crate computes the shortest identifying search term for every entity of a
//! named catalog:
//! - Corpus model (identifier to display name, collision reporting)
//! - Index builder (substring branching, shortest term wins)
//! - Input resolution (identifier, exact name, or narrowing term)
//! - Index cache keyed by the corpus identifier set
//! - Configuration and error types

pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod resolve;

pub use cache::{fingerprint, CacheOutcome, CachedIndex, IndexCache};
pub use config::{Config, OutputFormat};
pub use corpus::{normalize_name, CatalogEntry, Corpus};
pub use error::{Error, Result};
pub use index::{build_index, build_index_with_stats, group_size, BuildStats, SearchIndex};
pub use resolve::Resolver;
