//! Store configuration
//!
//! ```
//! use mapstore_primitives::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_toml_str(r#"
//!     name = "sessions"
//!     initial_capacity = 128
//! "#)?;
//! let store = Store::with_config(config);
//! assert_eq!(store.config().name, "sessions");
//!
//! let store = Store::builder().name("cache").initial_capacity(16).build();
//! assert_eq!(store.config().initial_capacity, 16);
//! # Ok::<(), mapstore_core::Error>(())
//! ```

use crate::map_store::Store;
use mapstore_core::{Error, Result};
use serde::Deserialize;

/// Name used when none is configured.
pub const DEFAULT_STORE_NAME: &str = "default";

/// Tunables for a [`Store`]. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Label attached to every log event the store emits
    pub name: String,
    /// Number of entries to reserve room for up front
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            initial_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Builder for [`Store`].
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store name used in log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Reserve room for `capacity` entries.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build the store.
    pub fn build(self) -> Store {
        Store::with_config(self.config)
    }
}
