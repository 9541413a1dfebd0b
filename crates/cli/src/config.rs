//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKROOM_DATA_DIR` - Directory holding stored values (default: `.stockroom`)
//! - `STOCKROOM_PRODUCT_LINE` - `classic` or `ledger` (default: `classic`)

use std::path::PathBuf;

use stockroom_admin::LineKind;
use stockroom_admin::storage::FileStorage;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".stockroom";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the file storage backend keeps its values
    pub data_dir: PathBuf,
    /// Product line used when `--line` is not given
    pub product_line: LineKind,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, "STOCKROOM_DATA_DIR", DEFAULT_DATA_DIR));
        let product_line = get_env_or_default(&lookup, "STOCKROOM_PRODUCT_LINE", "classic")
            .parse::<LineKind>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_PRODUCT_LINE".to_string(), e))?;

        Ok(Self {
            data_dir,
            product_line,
        })
    }

    /// File storage rooted at the data directory.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

fn get_env_or_default(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
