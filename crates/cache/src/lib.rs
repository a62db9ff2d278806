//! Set-associative cache simulator library.
//!
//! This crate implements a configurable set-associative cache that fronts a
//! block-addressable backing store and serves fixed-size record reads over a
//! flat 32-bit address space. It provides the following:
//! 1. **Core:** Address decomposition (tag/index/offset), per-set associative
//!    storage with bounded ways, and hit/miss accounting.
//! 2. **Policies:** Replacement policies (FIFO, LRU) behind a shared
//!    capability trait, selected once at construction.
//! 3. **Stores:** A narrow backing-store contract with file-backed and
//!    in-memory implementations; anything satisfying the contract plugs in.
//! 4. **Configuration:** serde-deserializable geometry validated explicitly
//!    at construction (power-of-two set and block sizes, record alignment).
//! 5. **Statistics:** Hit/miss counters and summary reporting for studying
//!    cache behavior under arbitrary access patterns.

/// Common building blocks (address geometry, error types).
pub mod common;
/// Simulator configuration (defaults, policy selection, JSON loading).
pub mod config;
/// The cache engine (cache, sets, replacement policies, LRU heap).
pub mod core;
/// Hit/miss statistics collection and reporting.
pub mod stats;
/// Backing-store contract and implementations.
pub mod store;

/// Cache construction/runtime errors; use `CacheError::Config` for geometry violations.
pub use crate::common::error::{CacheError, ConfigError};
/// Root configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Main cache type; owns its sets and the backing store for its open lifetime.
pub use crate::core::cache::Cache;
/// Backing-store contract and the bundled file/memory implementations.
pub use crate::store::{BackingStore, FileStore, MemStore};
