use serde::{Deserialize, Serialize};
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{currency::DEFAULT_CURRENCY_SYMBOL, errors::LedgerError};

/// Environment variable overriding the ledger file location.
pub const DATA_PATH_ENV: &str = "LEDGER_ANALYTICS_DATA";

const DEFAULT_DATA_FILE: &str = "./data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}

impl Config {
    /// Defaults, with `LEDGER_ANALYTICS_DATA` applied when set.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Applies `LEDGER_ANALYTICS_DATA` on top of the current values.
    pub fn apply_env(self) -> Self {
        self.with_env_override(env::var_os(DATA_PATH_ENV))
    }

    /// Reads a JSON config file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    fn with_env_override(self, value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => self.with_data_path(path),
            _ => self,
        }
    }
}
