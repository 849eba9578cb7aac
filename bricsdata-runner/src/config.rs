//! Collector configuration loaded from TOML.
//!
//! Every field is optional; a missing field takes the value the collectors
//! have always used, so an empty file (or no file at all) reproduces the
//! stock run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings shared by the indicator and commodity collectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
    /// Pause after every World Bank request, in milliseconds.
    pub throttle_ms: u64,
    /// First day of the commodity price history.
    pub start_date: NaiveDate,
    pub worldbank_base_url: String,
    pub yahoo_base_url: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/raw"),
            throttle_ms: 500,
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            worldbank_base_url: bricsdata_core::data::worldbank::DEFAULT_BASE_URL.into(),
            yahoo_base_url: bricsdata_core::data::yahoo::DEFAULT_BASE_URL.into(),
        }
    }
}

impl CollectorConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}
