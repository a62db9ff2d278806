//! Cache front-end.
//!
//! Owns the array of sets and the backing store, decomposes every incoming
//! address into its tag/index/offset fields, routes lookups to the selected
//! set, and aggregates hit/miss counters.

use tracing::debug;

use crate::common::addr::Geometry;
use crate::common::error::CacheError;
use crate::config::CacheConfig;
use crate::core::set::Set;
use crate::stats::CacheStats;
use crate::store::BackingStore;

/// Set-associative cache over a backing store.
///
/// The cache exclusively owns its store handle for its open lifetime;
/// [`Cache::close`] consumes the cache and closes the store. All state is
/// single-threaded: callers needing concurrency must serialize access
/// externally around the whole cache.
pub struct Cache {
    sets: Vec<Set>,
    geom: Geometry,
    stats: CacheStats,
    store: Box<dyn BackingStore>,
}

impl Cache {
    /// Validates the configuration, opens the store, and builds the sets.
    ///
    /// Each set is independently initialized with its own replacement-policy
    /// state.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry and policy selection.
    /// * `store` - The backing store; opened here, owned until `close`.
    ///
    /// # Errors
    ///
    /// [`CacheError::Config`] for invalid geometry (see
    /// [`crate::common::error::ConfigError`]) and [`CacheError::StoreOpen`]
    /// if the store fails to open. No cache exists on error.
    pub fn new(config: &CacheConfig, mut store: Box<dyn BackingStore>) -> Result<Self, CacheError> {
        let geom = Geometry::new(config)?;
        store.open().map_err(CacheError::StoreOpen)?;

        let sets = (0..geom.sets())
            .map(|_| Set::new(config.policy, geom.ways()))
            .collect();

        debug!(
            sets = geom.sets(),
            block_bytes = geom.block_bytes(),
            record_bytes = geom.record_bytes(),
            ways = geom.ways(),
            policy = ?config.policy,
            "cache created"
        );

        Ok(Self {
            sets,
            geom,
            stats: CacheStats::default(),
            store,
        })
    }

    /// Serves `record_bytes` of data at `address` through the cache.
    ///
    /// The full 32-bit address space is valid; addresses beyond the backing
    /// store's extent fail with [`CacheError::OutOfBounds`] when the store
    /// reports end-of-data on refill.
    ///
    /// # Errors
    ///
    /// Refill and alignment errors from the selected set; see
    /// [`CacheError`]. A failed miss installs nothing and counts as a miss.
    ///
    /// # Panics
    ///
    /// This function will not panic. The set indexing is guaranteed safe
    /// because `index_of` masks against the set count, which is the length
    /// of `sets`.
    pub fn get(&mut self, address: u32) -> Result<&[u8], CacheError> {
        let index = self.geom.index_of(address);
        self.sets[index].get(address, &self.geom, self.store.as_mut(), &mut self.stats)
    }

    /// Snapshot of `(hits, misses)`.
    pub fn counters(&self) -> (u64, u64) {
        (self.stats.hits, self.stats.misses)
    }

    /// Read access to the full statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zeroes the hit/miss counters without touching resident data.
    pub fn reset_counters(&mut self) {
        self.stats.reset();
    }

    /// The derived address geometry of this cache.
    pub fn geometry(&self) -> &Geometry {
        &self.geom
    }

    /// Closes the cache and the backing store.
    ///
    /// # Errors
    ///
    /// Surfaces the store's close error as [`CacheError::StoreClose`]; it is
    /// not swallowed.
    pub fn close(mut self) -> Result<(), CacheError> {
        self.store.close().map_err(CacheError::StoreClose)
    }
}
