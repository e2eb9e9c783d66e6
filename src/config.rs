use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::store::DEFAULT_DATA_PATH;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "Ledger.toml";

/// Default location of the log4rs configuration.
pub const DEFAULT_LOG_CONFIG_PATH: &str = "log4rs.yaml";

/// Application configuration, read from `Ledger.toml`. Every key is
/// optional; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    data_path: PathBuf,
    log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG_PATH),
        }
    }
}

impl Config {
    /// Load the config from `path`, falling back to defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// File the ledger is loaded from and saved to.
    /// Configured via `data_path`.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// log4rs configuration file. If it does not exist, logging goes to the
    /// console at `info` level.
    /// Configured via `log_config`.
    pub fn log_config(&self) -> &Path {
        &self.log_config
    }
}
