//! One associative bucket of the cache.
//!
//! A set owns a bounded collection of resident blocks keyed by tag,
//! delegates eviction decisions to its replacement policy, and refills from
//! the backing store on a miss. Geometry, store, and counters are owned by
//! the cache and passed in per call.

use std::collections::HashMap;

use tracing::{error, trace};

use crate::common::addr::Geometry;
use crate::common::error::CacheError;
use crate::config::ReplacementPolicy as PolicyKind;
use crate::core::policies::{Policy, ReplacementPolicy};
use crate::stats::CacheStats;
use crate::store::BackingStore;

/// One associative bucket: resident blocks keyed by tag plus policy state.
#[derive(Debug)]
pub struct Set {
    /// Resident blocks, at most `ways` entries.
    lines: HashMap<u32, Box<[u8]>>,
    /// This set's replacement-policy state.
    policy: Policy,
}

impl Set {
    /// Creates an empty set with fresh policy state.
    pub fn new(kind: PolicyKind, ways: usize) -> Self {
        Self {
            lines: HashMap::with_capacity(ways),
            policy: Policy::new(kind, ways),
        }
    }

    /// Serves one record from this set, refilling on a miss.
    ///
    /// On a hit the policy is notified and the resident block serves the
    /// record. On a miss the block is fetched, a victim is evicted if the
    /// set is full, and the fresh block serves the record.
    ///
    /// # Errors
    ///
    /// [`CacheError::UnalignedRecord`] if the record would cross the block
    /// boundary (checked before any state changes); refill errors per
    /// [`Set::refill`].
    pub fn get<'a>(
        &'a mut self,
        address: u32,
        geom: &Geometry,
        store: &mut dyn BackingStore,
        stats: &mut CacheStats,
    ) -> Result<&'a [u8], CacheError> {
        let offset = geom.offset_of(address);
        if offset + geom.record_bytes() > geom.block_bytes() {
            return Err(CacheError::UnalignedRecord { address });
        }

        let tag = geom.tag_of(address);
        if self.lines.contains_key(&tag) {
            stats.hits += 1;
            self.policy.hit(tag);
        } else {
            stats.misses += 1;
            self.refill(tag, geom.base_of(address), geom, store)?;
            self.policy.miss(tag);
        }

        let line = self
            .lines
            .get(&tag)
            .ok_or(CacheError::Internal("resident line vanished after refill"))?;
        Ok(&line[offset..offset + geom.record_bytes()])
    }

    /// Fetches a block and installs it under `tag`, evicting if necessary.
    ///
    /// The block is read before any eviction, so a failed or short read
    /// leaves residency and policy state untouched.
    ///
    /// # Errors
    ///
    /// [`CacheError::StoreRead`] on an I/O failure,
    /// [`CacheError::OutOfBounds`] on a short read at end-of-data, and
    /// [`CacheError::Internal`] if the policy cannot name a victim for a
    /// full set.
    fn refill(
        &mut self,
        tag: u32,
        base: u32,
        geom: &Geometry,
        store: &mut dyn BackingStore,
    ) -> Result<(), CacheError> {
        let mut line = vec![0_u8; geom.block_bytes()].into_boxed_slice();
        let read = store
            .read_at(&mut line, u64::from(base))
            .map_err(|source| CacheError::StoreRead {
                address: base,
                source,
            })?;
        if read < geom.block_bytes() {
            trace!(base, read, "short read at end-of-data; nothing installed");
            return Err(CacheError::OutOfBounds { address: base });
        }

        if self.lines.len() >= geom.ways() {
            match self.policy.pick_victim() {
                Some(victim) => {
                    trace!(tag = victim, "evicting line");
                    let _ = self.lines.remove(&victim);
                }
                None => {
                    debug_assert!(false, "full set but the policy tracks no residents");
                    error!("replacement policy returned no victim for a full set");
                    return Err(CacheError::Internal(
                        "replacement policy returned no victim for a full set",
                    ));
                }
            }
        }

        trace!(tag, base, "installing line");
        let _ = self.lines.insert(tag, line);
        Ok(())
    }
}
