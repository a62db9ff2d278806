//! Cache Replacement Policies.
//!
//! Implements the eviction algorithms that pick victim blocks in a full
//! cache set.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//!
//! The set talks to its policy through the [`ReplacementPolicy`] capability
//! trait; the concrete algorithm is a closed [`Policy`] variant chosen once
//! at construction. There is no open-ended plugin registration.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::config::ReplacementPolicy as PolicyKind;

/// Capability contract between a set and its replacement policy.
///
/// The set reports every access outcome; the policy answers eviction queries.
pub trait ReplacementPolicy {
    /// Notifies the policy that `tag` was found resident.
    fn hit(&mut self, tag: u32);

    /// Notifies the policy that `tag` was just installed after a miss.
    fn miss(&mut self, tag: u32);

    /// Removes and returns the tag to evict, or `None` if the policy tracks
    /// no residents. Callers only invoke this on a full set, so `None`
    /// signals an internal-consistency failure.
    fn pick_victim(&mut self) -> Option<u32>;
}

/// Closed set of replacement-policy implementations.
///
/// Each cache set owns one `Policy` with independent state.
#[derive(Debug)]
pub enum Policy {
    /// First-In, First-Out.
    Fifo(FifoPolicy),
    /// Least Recently Used.
    Lru(LruPolicy),
}

impl Policy {
    /// Creates fresh policy state for one set.
    ///
    /// # Arguments
    ///
    /// * `kind` - The configured policy selector.
    /// * `ways` - The set's associativity (bounds the tracked tags).
    pub fn new(kind: PolicyKind, ways: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Self::Fifo(FifoPolicy::new(ways)),
            PolicyKind::Lru => Self::Lru(LruPolicy::new(ways)),
        }
    }
}

impl ReplacementPolicy for Policy {
    fn hit(&mut self, tag: u32) {
        match self {
            Self::Fifo(policy) => policy.hit(tag),
            Self::Lru(policy) => policy.hit(tag),
        }
    }

    fn miss(&mut self, tag: u32) {
        match self {
            Self::Fifo(policy) => policy.miss(tag),
            Self::Lru(policy) => policy.miss(tag),
        }
    }

    fn pick_victim(&mut self) -> Option<u32> {
        match self {
            Self::Fifo(policy) => policy.pick_victim(),
            Self::Lru(policy) => policy.pick_victim(),
        }
    }
}
