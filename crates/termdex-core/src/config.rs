// Rust guideline compliant 2026-10-14

//! Configuration management for Termdex.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// One record per line.
    #[default]
    Plain,
}

/// Configuration for index building and caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Largest candidate set a search term may leave.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// File name of the cached index, relative to the config directory.
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default candidate threshold.
fn default_max_candidates() -> usize {
    9
}

fn default_cache_file() -> String {
    "index.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            cache_file: default_cache_file(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `TERMDEX_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Path to the `.termdex` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TERMDEX_MAX_CANDIDATES` - Candidate threshold (positive integer)
    /// - `TERMDEX_CACHE_FILE` - Cache file name
    /// - `TERMDEX_OUTPUT_FORMAT` - Output format (json/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TERMDEX_MAX_CANDIDATES") {
            self.max_candidates = val.parse().map_err(|_| {
                Error::InvalidConfig("TERMDEX_MAX_CANDIDATES must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TERMDEX_CACHE_FILE") {
            self.cache_file = val;
        }

        if let Ok(val) = std::env::var("TERMDEX_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "TERMDEX_OUTPUT_FORMAT must be json or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - max_candidates is zero
    /// - cache_file is empty
    fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(Error::InvalidConfig(
                "max_candidates must be greater than 0".to_string(),
            ));
        }

        if self.cache_file.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "cache_file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the cache file path inside the config directory.
    pub fn cache_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.cache_file)
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Path to the `.termdex` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests in this module mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("TERMDEX_MAX_CANDIDATES");
        std::env::remove_var("TERMDEX_CACHE_FILE");
        std::env::remove_var("TERMDEX_OUTPUT_FORMAT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_candidates, 9);
        assert_eq!(config.cache_file, "index.json");
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
max_candidates = 5
cache_file = "terms.json"
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.cache_file, "terms.json");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(
            config.cache_path(temp_dir.path()),
            temp_dir.path().join("terms.json")
        );
    }

    #[test]
    fn test_config_validation_zero_threshold() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "max_candidates = 0").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "max_candidates = [").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_threshold() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "max_candidates = 3").unwrap();

        std::env::set_var("TERMDEX_MAX_CANDIDATES", "12");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.max_candidates, 12);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TERMDEX_MAX_CANDIDATES", "many");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("TERMDEX_OUTPUT_FORMAT", "table");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("TERMDEX_CACHE_FILE", " ");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            max_candidates: 4,
            cache_file: "cache.json".to_string(),
            output_format: OutputFormat::Json,
        };
        original.save(temp_dir.path()).unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
