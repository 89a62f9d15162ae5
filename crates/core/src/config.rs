// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shop configuration
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! data_dir = "data"
//! admin_password = "admin123"
//! popular_limit = 10
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "kiosk.toml";

pub const PRODUCTS_FILE: &str = "products.csv";
pub const NOTIFICATIONS_FILE: &str = "notifications.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the ledger and notification log
    pub data_dir: PathBuf,
    /// Shared secret for admin commands
    pub admin_password: String,
    /// Rows shown in the popularity ranking
    pub popular_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            admin_password: "admin123".to_string(),
            popular_limit: 10,
        }
    }
}

impl Config {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the active config: an explicit path must exist, otherwise
    /// `kiosk.toml` in `dir` is used when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Replace the data directory when an override is given
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    pub fn notifications_path(&self) -> PathBuf {
        self.data_dir.join(NOTIFICATIONS_FILE)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
