//! Backing-Store Implementation Tests.
//!
//! Verifies the store contract for both bundled implementations:
//! - Lifecycle: access before open fails, close is idempotent
//! - Positional reads, short reads at end-of-data, zero past it
//! - Write-then-read round trips

use std::io::{ErrorKind, Write};

use tempfile::NamedTempFile;
use waysim_core::store::BackingStore;
use waysim_core::{FileStore, MemStore};

use crate::common::pattern_data;

// ══════════════════════════════════════════════════════════
// 1. FileStore
// ══════════════════════════════════════════════════════════

/// A temp file pre-filled with 64 pattern bytes.
fn pattern_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&pattern_data(64)).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn file_access_before_open_fails() {
    let file = pattern_file();
    let mut store = FileStore::new(file.path());

    let mut buf = [0_u8; 8];
    let err = store.read_at(&mut buf, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConnected);
    let err = store.write_at(&buf, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConnected);
}

#[test]
fn file_open_missing_path_fails() {
    let mut store = FileStore::new("/nonexistent/waysim-store");
    assert!(store.open().is_err());
}

#[test]
fn file_positional_reads() {
    let file = pattern_file();
    let mut store = FileStore::new(file.path());
    store.open().unwrap();

    let mut buf = [0_u8; 16];
    assert_eq!(store.read_at(&mut buf, 24).unwrap(), 16);
    assert_eq!(buf.to_vec(), pattern_data(64)[24..40].to_vec());
}

#[test]
fn file_short_read_at_end_of_data() {
    let file = pattern_file();
    let mut store = FileStore::new(file.path());
    store.open().unwrap();

    let mut buf = [0_u8; 16];
    assert_eq!(store.read_at(&mut buf, 56).unwrap(), 8);
    assert_eq!(store.read_at(&mut buf, 64).unwrap(), 0);
    assert_eq!(store.read_at(&mut buf, 1000).unwrap(), 0);
}

#[test]
fn file_write_then_read_round_trip() {
    let file = pattern_file();
    let mut store = FileStore::new(file.path());
    store.open().unwrap();

    assert_eq!(store.write_at(&[0xAA, 0xBB, 0xCC], 10).unwrap(), 3);
    let mut buf = [0_u8; 3];
    assert_eq!(store.read_at(&mut buf, 10).unwrap(), 3);
    assert_eq!(buf, [0xAA, 0xBB, 0xCC]);
}

#[test]
fn file_close_is_idempotent() {
    let file = pattern_file();
    let mut store = FileStore::new(file.path());
    store.open().unwrap();

    store.close().unwrap();
    store.close().unwrap();

    // Closed means not connected again.
    let mut buf = [0_u8; 4];
    assert_eq!(
        store.read_at(&mut buf, 0).unwrap_err().kind(),
        ErrorKind::NotConnected
    );
}

// ══════════════════════════════════════════════════════════
// 2. MemStore
// ══════════════════════════════════════════════════════════

#[test]
fn mem_access_before_open_fails() {
    let mut store = MemStore::new(pattern_data(32));
    let mut buf = [0_u8; 4];
    assert_eq!(
        store.read_at(&mut buf, 0).unwrap_err().kind(),
        ErrorKind::NotConnected
    );
}

#[test]
fn mem_reads_clamp_to_extent() {
    let mut store = MemStore::new(pattern_data(32));
    assert_eq!(store.len(), 32);
    assert!(!store.is_empty());
    store.open().unwrap();

    let mut buf = [0_u8; 16];
    assert_eq!(store.read_at(&mut buf, 0).unwrap(), 16);
    assert_eq!(buf.to_vec(), pattern_data(32)[..16].to_vec());

    assert_eq!(store.read_at(&mut buf, 24).unwrap(), 8);
    assert_eq!(store.read_at(&mut buf, 32).unwrap(), 0);
    assert_eq!(store.read_at(&mut buf, u64::MAX).unwrap(), 0);
}

#[test]
fn mem_write_then_read_round_trip() {
    let mut store = MemStore::new(vec![0; 16]);
    store.open().unwrap();

    assert_eq!(store.write_at(&[1, 2, 3, 4], 12).unwrap(), 4);
    // Writes clamp at the fixed extent.
    assert_eq!(store.write_at(&[9, 9, 9], 14).unwrap(), 2);
    assert_eq!(store.write_at(&[9], 16).unwrap(), 0);

    let mut buf = [0_u8; 4];
    assert_eq!(store.read_at(&mut buf, 12).unwrap(), 4);
    assert_eq!(buf, [1, 2, 9, 9]);
}

#[test]
fn mem_close_then_reopen() {
    let mut store = MemStore::new(pattern_data(8));
    store.open().unwrap();
    store.close().unwrap();

    let mut buf = [0_u8; 4];
    assert_eq!(
        store.read_at(&mut buf, 0).unwrap_err().kind(),
        ErrorKind::NotConnected
    );

    store.open().unwrap();
    assert_eq!(store.read_at(&mut buf, 0).unwrap(), 4);
}
