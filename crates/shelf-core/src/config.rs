//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/shelf/config.toml)
//! 3. Environment variables (SHELF_* prefix)
//!
//! Environment variables take precedence over config file values.
//! Nothing here points at stored data: the catalog lives in memory only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable prefix
const ENV_PREFIX: &str = "SHELF";

/// Default external catalog lookup prefix
pub const DEFAULT_EXTERNAL_URL: &str = "https://openlibrary.org/isbn/";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix of the external catalog link; the encoded ISBN is appended
    #[serde(default = "default_external_url")]
    pub external_url: String,

    /// How many title characters seed the search after adding a book
    #[serde(default = "default_search_seed_len")]
    pub search_seed_len: usize,

    /// How long the "Copied" label stays on a card, in milliseconds
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Log file for the TUI (defaults to the temp dir)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            external_url: default_external_url(),
            search_seed_len: default_search_seed_len(),
            copy_feedback_ms: default_copy_feedback_ms(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (SHELF_EXTERNAL_URL, SHELF_SEARCH_SEED_LEN,
    ///    SHELF_COPY_FEEDBACK_MS, SHELF_LOG_FILE)
    /// 2. Config file (~/.config/shelf/config.toml or SHELF_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // SHELF_EXTERNAL_URL
        if let Ok(val) = std::env::var(format!("{}_EXTERNAL_URL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.external_url = val;
            }
        }

        // SHELF_SEARCH_SEED_LEN
        if let Ok(val) = std::env::var(format!("{}_SEARCH_SEED_LEN", ENV_PREFIX)) {
            match val.parse() {
                Ok(n) => self.search_seed_len = n,
                Err(_) => warn!(value = %val, "ignoring invalid SHELF_SEARCH_SEED_LEN"),
            }
        }

        // SHELF_COPY_FEEDBACK_MS
        if let Ok(val) = std::env::var(format!("{}_COPY_FEEDBACK_MS", ENV_PREFIX)) {
            match val.parse() {
                Ok(ms) => self.copy_feedback_ms = ms,
                Err(_) => warn!(value = %val, "ignoring invalid SHELF_COPY_FEEDBACK_MS"),
            }
        }

        // SHELF_LOG_FILE
        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with SHELF_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelf")
            .join("config.toml")
    }

    /// Where the TUI writes its log
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("shelf-debug.log"))
    }

    /// How long the "Copied" label stays up
    pub fn copy_feedback(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.copy_feedback_ms)
    }
}

fn default_external_url() -> String {
    DEFAULT_EXTERNAL_URL.to_string()
}

fn default_search_seed_len() -> usize {
    7
}

fn default_copy_feedback_ms() -> u64 {
    1200
}
