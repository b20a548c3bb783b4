//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_DATA_DIR` - Directory for `FileStore` data (default: in-memory store)
//! - `STOREFRONT_CHECKOUT_DELAY_MS` - Simulated payment latency (default: 3000)
//! - `STOREFRONT_CHANNEL_CAPACITY` - Request buffer of each store actor (default: 32)

use actor_store::{FileStore, KeyValueStore, MemoryStore, StorageError};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DATA_DIR_VAR: &str = "STOREFRONT_DATA_DIR";
pub const CHECKOUT_DELAY_VAR: &str = "STOREFRONT_CHECKOUT_DELAY_MS";
pub const CHANNEL_CAPACITY_VAR: &str = "STOREFRONT_CHANNEL_CAPACITY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Where collections are written. `None` keeps them in memory.
    pub data_dir: Option<PathBuf>,
    pub checkout_delay_ms: u64,
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            checkout_delay_ms: 3000,
            channel_capacity: 32,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(raw) => match parse::<usize>(CHANNEL_CAPACITY_VAR, &raw)? {
                0 => return Err(invalid(CHANNEL_CAPACITY_VAR, "must be at least 1")),
                capacity => capacity,
            },
            None => defaults.channel_capacity,
        };

        Ok(Self {
            data_dir: lookup(DATA_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            checkout_delay_ms: match lookup(CHECKOUT_DELAY_VAR) {
                Some(raw) => parse(CHECKOUT_DELAY_VAR, &raw)?,
                None => defaults.checkout_delay_ms,
            },
            channel_capacity,
        })
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Opens the configured backend.
    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        match &self.data_dir {
            Some(dir) => {
                info!(data_dir = %dir.display(), "Using file store");
                Ok(Arc::new(FileStore::open(dir)?))
            }
            None => {
                info!("Using in-memory store");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}

fn parse<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| invalid(var, e.to_string()))
}

fn invalid(var: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var: var.to_string(),
        reason: reason.into(),
    }
}
