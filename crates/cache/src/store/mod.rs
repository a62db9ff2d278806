//! Backing-store contract for the cache.
//!
//! This module defines the only interface the cache core depends on, plus
//! two implementations. It provides:
//! 1. **Contract:** Open/close lifecycle and best-effort positional I/O.
//! 2. **File Store:** A file on disk as the byte source.
//! 3. **Memory Store:** An in-memory buffer for tests and experiments.
//!
//! Any random-access byte source satisfying the contract plugs into the
//! cache without modifying cache logic.

/// File-backed store implementation.
pub mod file;

/// In-memory store implementation.
pub mod memory;

pub use file::FileStore;
pub use memory::MemStore;

use std::io;

/// Random-access byte store fronted by the cache.
///
/// Reads and writes are positional and best-effort: a read may return fewer
/// bytes than requested at end-of-data, and zero past it. Accessing a store
/// before `open` (or after `close`) is an `io::Error`, not a panic.
pub trait BackingStore {
    /// Prepares the store for access.
    ///
    /// # Errors
    ///
    /// Any underlying failure to acquire the byte source.
    fn open(&mut self) -> io::Result<()>;

    /// Reads up to `buf.len()` bytes starting at byte `offset`.
    ///
    /// Returns the number of bytes read; fewer than requested means
    /// end-of-data was reached.
    ///
    /// # Errors
    ///
    /// Any underlying I/O failure, or the store is not open.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize>;

    /// Writes up to `buf.len()` bytes starting at byte `offset`.
    ///
    /// Returns the number of bytes written. Unused by the cache's read path;
    /// present so stores are usable for data preparation and future
    /// write-back support.
    ///
    /// # Errors
    ///
    /// Any underlying I/O failure, or the store is not open.
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize>;

    /// Releases the byte source. Idempotent.
    ///
    /// # Errors
    ///
    /// Any underlying failure while releasing the source.
    fn close(&mut self) -> io::Result<()>;
}
