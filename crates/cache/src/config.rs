//! Configuration system for the cache simulator.
//!
//! This module defines the structures and enums that parameterize a cache.
//! It provides:
//! 1. **Defaults:** Baseline geometry constants used when fields are omitted.
//! 2. **Structures:** The cache geometry configuration with serde defaults.
//! 3. **Enums:** The replacement-policy selector.
//!
//! Configuration is supplied as JSON via [`CacheConfig::from_json`] or built
//! in code from the `Default` geometry and adjusted field by field.

use serde::Deserialize;

use crate::common::addr::Geometry;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden in a configuration document.
mod defaults {
    /// Default set count (512 sets, 9 index bits).
    pub const SETS: usize = 512;

    /// Default block size in bytes (4 KiB fetched per miss).
    pub const BLOCK_BYTES: usize = 4096;

    /// Default record size in bytes (32 bytes returned per lookup).
    pub const RECORD_BYTES: usize = 32;

    /// Default associativity (4 ways per set).
    pub const WAYS: usize = 4;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which resident block to evict
/// when a new block must be installed in a full cache set. Fixed for the
/// cache's lifetime once construction completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the resident block whose most recent access (hit or initial
    /// fill) is oldest.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// First In First Out replacement policy.
    ///
    /// Evicts blocks strictly in arrival order; hits never reorder the queue.
    #[serde(alias = "Fifo")]
    Fifo,
}

/// Cache geometry and policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of sets (must be a power of two)
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,

    /// Bytes fetched from the backing store per miss (must be a power of two)
    #[serde(default = "CacheConfig::default_block")]
    pub block_bytes: usize,

    /// Bytes returned per lookup (nonzero, divides `block_bytes`)
    #[serde(default = "CacheConfig::default_record")]
    pub record_bytes: usize,

    /// Associativity (maximum resident blocks per set)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Returns the default set count.
    fn default_sets() -> usize {
        defaults::SETS
    }

    /// Returns the default block size in bytes.
    fn default_block() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Returns the default record size in bytes.
    fn default_record() -> usize {
        defaults::RECORD_BYTES
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Checks every construction precondition without building a cache.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition as a [`ConfigError`]; see
    /// [`Geometry::new`] for the full list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = Geometry::new(self)?;
        Ok(())
    }

    /// Deserializes and validates a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `text` - A JSON object; omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for undeserializable input, or the
    /// violated precondition for a well-formed but invalid geometry.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CacheConfig {
    /// Creates the default configuration: 512 sets of 4 KiB blocks, 32-byte
    /// records, 4 ways, LRU replacement.
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            block_bytes: defaults::BLOCK_BYTES,
            record_bytes: defaults::RECORD_BYTES,
            ways: defaults::WAYS,
            policy: ReplacementPolicy::default(),
        }
    }
}
