//! Address geometry for set-associative lookup.
//!
//! This module derives the bitfield layout of a cache address and performs
//! the decomposition used on every access. It provides:
//! 1. **Derivation:** Bit widths and masks computed from a validated
//!    configuration (never floating-point log2).
//! 2. **Decomposition:** Tag, set index, block base, and intra-block offset
//!    extraction for any 32-bit address.
//!
//! An address splits into three disjoint fields, high to low:
//! `[ tag | index | offset ]` with `tag_bits + index_bits + offset_bits == 32`.

use crate::common::error::ConfigError;
use crate::config::CacheConfig;

/// Width of the simulated address space in bits.
pub const ADDRESS_BITS: u32 = 32;

/// Returns a mask covering the `bits` least significant bits.
fn low_mask(bits: u32) -> u32 {
    if bits == 0 {
        0
    } else {
        u32::MAX >> (ADDRESS_BITS - bits)
    }
}

/// Derived address-decomposition state for one cache geometry.
///
/// A `Geometry` is only ever built from a validated [`CacheConfig`], so the
/// masks and bit widths are consistent by construction. All decomposition
/// methods are total over the 32-bit address space; addresses beyond the
/// backing store's extent surface only when the store reports end-of-data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    sets: usize,
    block_bytes: usize,
    record_bytes: usize,
    ways: usize,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
    index_mask: u32,
    offset_mask: u32,
}

impl Geometry {
    /// Validates a configuration and derives its address geometry.
    ///
    /// # Arguments
    ///
    /// * `config` - The cache configuration to validate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the record size is zero, exceeds the
    /// block size, or does not divide it; if the set count or block size is
    /// not a power of two; if the per-set way count is zero; or if the index
    /// and offset fields together exceed the 32-bit address space.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if config.record_bytes == 0 {
            return Err(ConfigError::ZeroRecord);
        }
        if config.record_bytes > config.block_bytes {
            return Err(ConfigError::RecordExceedsBlock {
                record: config.record_bytes,
                block: config.block_bytes,
            });
        }
        if config.block_bytes % config.record_bytes != 0 {
            return Err(ConfigError::RecordNotAligned {
                record: config.record_bytes,
                block: config.block_bytes,
            });
        }
        // is_power_of_two() is a popcount check; zero fails it too.
        if !config.sets.is_power_of_two() {
            return Err(ConfigError::SetsNotPowerOfTwo(config.sets));
        }
        if !config.block_bytes.is_power_of_two() {
            return Err(ConfigError::BlockNotPowerOfTwo(config.block_bytes));
        }
        if config.ways == 0 {
            return Err(ConfigError::ZeroWays);
        }

        let offset_bits = config.block_bytes.trailing_zeros();
        let index_bits = config.sets.trailing_zeros();
        if offset_bits + index_bits > ADDRESS_BITS {
            return Err(ConfigError::AddressSpaceExceeded {
                bits: offset_bits + index_bits,
            });
        }
        let tag_bits = ADDRESS_BITS - offset_bits - index_bits;

        Ok(Self {
            sets: config.sets,
            block_bytes: config.block_bytes,
            record_bytes: config.record_bytes,
            ways: config.ways,
            offset_bits,
            index_bits,
            tag_bits,
            index_mask: low_mask(index_bits),
            offset_mask: low_mask(offset_bits),
        })
    }

    /// Extracts the set index from an address.
    #[inline]
    pub fn index_of(&self, address: u32) -> usize {
        (address.checked_shr(self.offset_bits).unwrap_or(0) & self.index_mask) as usize
    }

    /// Extracts the tag from an address.
    ///
    /// With zero tag bits (a fully index+offset address layout) every
    /// address in a set shares the single empty tag.
    #[inline]
    pub fn tag_of(&self, address: u32) -> u32 {
        address
            .checked_shr(ADDRESS_BITS - self.tag_bits)
            .unwrap_or(0)
    }

    /// Returns the block-aligned base address of the block containing `address`.
    #[inline]
    pub fn base_of(&self, address: u32) -> u32 {
        address & !self.offset_mask
    }

    /// Returns the byte offset of `address` within its block.
    #[inline]
    pub fn offset_of(&self, address: u32) -> usize {
        (address & self.offset_mask) as usize
    }

    /// Number of sets.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Bytes fetched from the backing store per miss.
    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Bytes returned to the caller per lookup.
    pub fn record_bytes(&self) -> usize {
        self.record_bytes
    }

    /// Maximum resident blocks per set.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Bit width of the intra-block offset field.
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Bit width of the set index field.
    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Bit width of the tag field.
    pub fn tag_bits(&self) -> u32 {
        self.tag_bits
    }
}
