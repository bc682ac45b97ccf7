// Rust guideline compliant 2026-10-14

//! Persistent cache for a built search-term index.
//!
//! The cached index is keyed by a fingerprint of the corpus identifier set.
//! Names are not part of the fingerprint: renaming an entity does not
//! invalidate the cache, adding or removing one does.

use crate::{build_index, Corpus, Result, SearchIndex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Index document as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Ord + Deserialize<'de>"
))]
pub struct CachedIndex<K> {
    /// Fingerprint of the identifier set the index was built from.
    pub fingerprint: String,
    /// The built index.
    pub index: SearchIndex<K>,
}

/// Whether [`IndexCache::load_or_build`] reused the stored index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheOutcome {
    /// The stored index matched the corpus and threshold.
    Hit,
    /// The index was rebuilt and stored.
    Rebuilt,
}

/// Computes the SHA-256 fingerprint of a corpus identifier set.
///
/// # Errors
///
/// Returns an error if the identifiers cannot be serialized.
pub fn fingerprint<K: Ord + Clone + Serialize>(corpus: &Corpus<K>) -> Result<String> {
    let ids: Vec<&K> = corpus.identifiers().collect();
    let encoded = serde_json::to_vec(&ids)?;

    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}

/// JSON file cache for one search-term index.
#[derive(Debug, Clone)]
pub struct IndexCache {
    path: PathBuf,
}

impl IndexCache {
    /// Creates a cache backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored index.
    ///
    /// A file that cannot be parsed is reported and treated as absent.
    ///
    /// # Returns
    ///
    /// The cached document, or `None` if there is no usable cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load<K>(&self) -> Result<Option<CachedIndex<K>>>
    where
        K: Ord + DeserializeOwned,
    {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(cached) => Ok(Some(cached)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable index cache");
                Ok(None)
            }
        }
    }

    /// Stores an index document.
    ///
    /// Uses atomic write operations (temp file + rename) so readers never see
    /// a partially written cache.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The file cannot be written or renamed
    pub fn save<K: Serialize>(&self, cached: &CachedIndex<K>) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path)?;
            let json = serde_json::to_string_pretty(cached)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Removes the stored index, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn invalidate(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Returns the cached index for a corpus, rebuilding it when stale.
    ///
    /// The stored index is reused only if it was built from the same
    /// identifier set with the same `max_candidates`.
    ///
    /// # Arguments
    ///
    /// * `corpus` - Current corpus snapshot
    /// * `max_candidates` - Candidate threshold to build with
    ///
    /// # Returns
    ///
    /// The index and whether it came from the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_candidates` is zero
    /// - The cache cannot be read or written
    pub fn load_or_build<K>(
        &self,
        corpus: &Corpus<K>,
        max_candidates: usize,
    ) -> Result<(SearchIndex<K>, CacheOutcome)>
    where
        K: Ord + Clone + Serialize + DeserializeOwned,
    {
        let current = fingerprint(corpus)?;

        if let Some(cached) = self.load::<K>()? {
            if cached.fingerprint == current && cached.index.max_candidates() == max_candidates {
                debug!(path = %self.path.display(), "index cache hit");
                return Ok((cached.index, CacheOutcome::Hit));
            }
            info!(
                path = %self.path.display(),
                identifiers_changed = cached.fingerprint != current,
                "index cache is stale, rebuilding"
            );
        }

        let index = build_index(corpus, max_candidates)?;
        self.save(&CachedIndex {
            fingerprint: current,
            index: index.clone(),
        })?;
        info!(
            path = %self.path.display(),
            entries = corpus.len(),
            covered = index.len(),
            "stored rebuilt index"
        );

        Ok((index, CacheOutcome::Rebuilt))
    }

    /// Executes a closure with an exclusive lock on the cache file.
    ///
    /// The lock is an advisory lock on a sibling `.lock` file. A caller that
    /// finds it held waits until the holder releases it, so concurrent
    /// rebuilds run one after another.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock file cannot be opened or locked
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        if lock_file.try_lock_exclusive().is_err() {
            debug!(path = %lock_path.display(), "waiting for index cache lock");
            lock_file.lock_exclusive()?;
        }

        let result = f();

        let _ = lock_file.unlock();

        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
