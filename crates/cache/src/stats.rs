//! Hit/miss statistics collection and reporting.
//!
//! Tracks cache effectiveness for benchmarking: access counts, hit ratio,
//! and a plain-text summary printer.

/// Hit/miss counters for one cache.
///
/// Counters increase monotonically until [`CacheStats::reset`]; resetting
/// never touches resident cache data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups served from a resident block.
    pub hits: u64,
    /// Number of lookups that required a refill from the backing store.
    pub misses: u64,
}

impl CacheStats {
    /// Total number of lookups.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served without touching the backing store.
    ///
    /// Returns `0.0` before the first access.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses() == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses() as f64
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints a summary block to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic: the divisor is forced to at least 1
    /// before any percentage is computed.
    pub fn print_summary(&self) {
        let total = if self.accesses() == 0 {
            1
        } else {
            self.accesses()
        };
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses());
        println!(
            "hits                     {} ({:.2}%)",
            self.hits,
            (self.hits as f64 / total as f64) * 100.0
        );
        println!(
            "misses                   {} ({:.2}%)",
            self.misses,
            (self.misses as f64 / total as f64) * 100.0
        );
        println!("hit_rate                 {:.4}", self.hit_rate());
        println!("----------------------------------------------------------");
    }
}
