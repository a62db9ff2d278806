//! Error taxonomy for cache construction and operation.
//!
//! This module defines every failure mode the simulator can surface. It
//! provides:
//! 1. **Configuration Errors:** One variant per violated construction
//!    precondition, returned before any cache state exists.
//! 2. **Runtime Errors:** Store lifecycle and refill failures, plus
//!    internal-consistency violations that are recoverable in release builds.
//!
//! There are no process-terminating paths: every failure is a value the
//! caller can match on.

use std::io;

use thiserror::Error;

/// Invalid construction parameters.
///
/// Returned by [`crate::config::CacheConfig::validate`] and cache
/// construction; the cache is not created when any variant is raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The record size is zero.
    #[error("record size must be nonzero")]
    ZeroRecord,

    /// The record size exceeds the block size.
    #[error("record size {record} exceeds block size {block}")]
    RecordExceedsBlock {
        /// Configured record size in bytes.
        record: usize,
        /// Configured block size in bytes.
        block: usize,
    },

    /// The block size is not a whole number of records.
    #[error("block size {block} is not a multiple of record size {record}")]
    RecordNotAligned {
        /// Configured record size in bytes.
        record: usize,
        /// Configured block size in bytes.
        block: usize,
    },

    /// The set count is not a power of two, so no index mask exists.
    #[error("set count {0} is not a power of two")]
    SetsNotPowerOfTwo(usize),

    /// The block size is not a power of two, so no offset mask exists.
    #[error("block size {0} is not a power of two")]
    BlockNotPowerOfTwo(usize),

    /// A set must hold at least one way.
    #[error("a set must have at least one way")]
    ZeroWays,

    /// The index and offset fields do not fit the 32-bit address space.
    #[error("index and offset fields occupy {bits} bits; the address space has 32")]
    AddressSpaceExceeded {
        /// Combined index + offset width in bits.
        bits: u32,
    },

    /// The configuration text could not be deserialized.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Runtime errors surfaced by cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Construction parameters were rejected; see [`ConfigError`].
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The backing store failed to open; the cache was not created.
    #[error("cannot open the backing store: {0}")]
    StoreOpen(#[source] io::Error),

    /// The backing store failed to close during cache teardown.
    #[error("cannot close the backing store: {0}")]
    StoreClose(#[source] io::Error),

    /// A block read failed during miss refill; nothing was installed.
    #[error("read of block at {address:#010x} failed: {source}")]
    StoreRead {
        /// Block-aligned base address of the failed read.
        address: u32,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The address lies beyond the backing store's extent (short or absent
    /// read at end-of-data); nothing was installed.
    #[error("address {address:#010x} is beyond the end of the backing store")]
    OutOfBounds {
        /// Block-aligned base address of the short read.
        address: u32,
    },

    /// The record starting at this address would cross its block boundary.
    #[error("record at {address:#010x} crosses a block boundary")]
    UnalignedRecord {
        /// The offending access address.
        address: u32,
    },

    /// A policy or heap invariant was violated. Fatal (`debug_assert!`) in
    /// debug builds; logged and recoverable in release builds.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
