// Rust guideline compliant 2026-10-14

//! Config directory discovery and path management.

use anyhow::Result;
use std::path::{Path, PathBuf};
use termdex_core::{Config, IndexCache};

/// Default config directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = ".termdex";

/// Resolved config directory and the configuration loaded from it.
#[derive(Debug, Clone)]
pub struct Workspace {
    config_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens the workspace rooted at a config directory.
    ///
    /// A missing directory is not an error: defaults and environment
    /// overrides still apply, and the directory is created on first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn open(config_dir: Option<&Path>) -> Result<Self> {
        let config_dir = config_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
        let config = Config::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    /// Returns the config directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        self.config_dir.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the candidate threshold, preferring an explicit override.
    #[must_use]
    pub fn max_candidates(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.max_candidates)
    }

    /// Opens the index cache configured for this workspace.
    #[must_use]
    pub fn index_cache(&self) -> IndexCache {
        IndexCache::new(self.config.cache_path(&self.config_dir))
    }
}
