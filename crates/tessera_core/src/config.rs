//! # Capacity Configuration
//!
//! Container capacities are decided once, at startup, from a TOML file:
//!
//! ```toml
//! default_capacity = 256
//!
//! [pools.particles]
//! capacity = 4096
//!
//! [pools.projectiles]
//! capacity = 512
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Capacity used when no configuration says otherwise.
pub const DEFAULT_CAPACITY: usize = 256;

/// Per-pool configuration entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Fixed number of slots reserved for this pool.
    pub capacity: usize,
}

/// Capacity configuration for every named container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Capacity for names without their own entry.
    pub default_capacity: usize,
    /// Named entries.
    pub pools: BTreeMap<String, PoolEntry>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            pools: BTreeMap::new(),
        }
    }
}

impl PoolConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidCapacity`] for any zero capacity.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;

        tracing::info!(
            "loaded pool config from {}: {} pools, default capacity {}",
            path.display(),
            config.pools.len(),
            config.default_capacity
        );

        Ok(config)
    }

    /// Rejects zero capacities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] naming the first bad entry.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_capacity == 0 {
            return Err(ConfigError::InvalidCapacity {
                name: "default_capacity".to_owned(),
            });
        }

        if let Some((name, _)) = self.pools.iter().find(|(_, entry)| entry.capacity == 0) {
            return Err(ConfigError::InvalidCapacity { name: name.clone() });
        }

        Ok(())
    }

    /// Returns the capacity for `name`, falling back to the default.
    #[must_use]
    pub fn capacity_for(&self, name: &str) -> usize {
        self.pools
            .get(name)
            .map_or(self.default_capacity, |entry| entry.capacity)
    }
}
