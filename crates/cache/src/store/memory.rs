//! In-memory store.
//!
//! A byte buffer with the [`BackingStore`] contract, for tests and
//! experiments that need a store with a precisely known extent.

use std::io;

use super::BackingStore;

/// A fixed-extent in-memory byte buffer as a [`BackingStore`].
#[derive(Debug, Clone)]
pub struct MemStore {
    data: Vec<u8>,
    open: bool,
}

impl MemStore {
    /// Creates a store over the given bytes. Not yet open.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, open: false }
    }

    /// The store's extent in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for an empty store.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_open(&self) -> io::Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "store is not open",
            ))
        }
    }
}

impl BackingStore for MemStore {
    fn open(&mut self) -> io::Result<()> {
        self.open = true;
        Ok(())
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.check_open()?;
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        if start >= self.data.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        Ok(n)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        self.check_open()?;
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        if start >= self.data.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.data.len() - start);
        self.data[start..start + n].copy_from_slice(&buf[..n]);
        Ok(n)
    }

    fn close(&mut self) -> io::Result<()> {
        self.open = false;
        Ok(())
    }
}
