//! File-backed store.
//!
//! Fronts a regular file as the cache's byte source. The file is opened
//! read/write on `open`; positional access seeks then loops so callers see
//! at most one short read, at end-of-file.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use super::BackingStore;

/// A file on disk as a [`BackingStore`].
///
/// Construction does not open the file; call
/// [`open`](BackingStore::open) first.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: Option<File>,
}

impl FileStore {
    /// Creates a store for the file at `path` without opening it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// The open file handle, or a `NotConnected` error before `open`.
    fn handle(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "store is not open"))
    }
}

impl BackingStore for FileStore {
    fn open(&mut self) -> io::Result<()> {
        let file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        self.file = Some(file);
        Ok(())
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let file = self.handle()?;
        let _ = file.seek(SeekFrom::Start(offset))?;
        let mut total = 0;
        while total < buf.len() {
            match file.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        let file = self.handle()?;
        let _ = file.seek(SeekFrom::Start(offset))?;
        let mut total = 0;
        while total < buf.len() {
            match file.write(&buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    fn close(&mut self) -> io::Result<()> {
        // Dropping a File discards flush errors; sync first so close
        // failures are observable, as the contract requires.
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        Ok(())
    }
}
