//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once inserted, `check()` MUST return true
//! - Monotonic bits: insertion only sets bits, never clears them

use bitvec::prelude::*;
use tracing::debug;

use crate::error::FilterError;

use super::hash_functions::probe_indexes;
use super::parameters::calculate_parameters;

/// Bloom filter for probabilistic membership testing.
///
/// A space-efficient probabilistic structure answering "is this item possibly
/// a member?". False positives are possible at a rate bounded by the sizing
/// parameters; false negatives are not.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Size in bits (m)
    m: usize,
    /// Number of hash probes (k)
    k: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter with explicit parameters.
    ///
    /// # Arguments
    /// * `size_bits` - Size in bits (m), must be positive
    /// * `hash_count` - Number of hash probes (k), must be positive
    ///
    /// # Errors
    /// `InvalidParameter` when either argument is zero. A zero-bit array has
    /// no valid probe target, and zero probes would make every query pass
    /// vacuously; both are rejected here rather than clamped.
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        if size_bits == 0 {
            return Err(FilterError::InvalidParameter(
                "filter size must be positive".to_string(),
            ));
        }
        if hash_count == 0 {
            return Err(FilterError::InvalidParameter(
                "hash count must be positive".to_string(),
            ));
        }

        debug!(size_bits, hash_count, "creating bloom filter");

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; size_bits],
            m: size_bits,
            k: hash_count,
        })
    }

    /// Create a filter sized for an expected item count and target
    /// false-positive probability.
    ///
    /// # Errors
    /// `InvalidParameter` when the sizing inputs are out of domain, or when
    /// the truncating parameter formula yields a degenerate `hash_count` of 0
    /// (possible for very permissive targets).
    pub fn with_target_fpr(
        expected_items: usize,
        target_fpr: f64,
    ) -> Result<Self, FilterError> {
        let params = calculate_parameters(expected_items, target_fpr)?;
        Self::new(params.size_bits, params.hash_count)
    }

    /// Insert an item into the filter.
    ///
    /// Sets the item's `k` probe bits. After insertion, `check(item)` is
    /// guaranteed to return true. Re-inserting an item leaves the bit array
    /// unchanged.
    pub fn insert(&mut self, item: &[u8]) {
        for idx in probe_indexes(item, self.k, self.m) {
            self.bits.set(idx, true);
        }
    }

    /// Test whether an item might be in the filter.
    ///
    /// Returns:
    /// - `false`: the item is definitely NOT in the set (never a false
    ///   negative); short-circuits on the first unset probe bit
    /// - `true`: the item is probably in the set (could be a false positive)
    pub fn check(&self, item: &[u8]) -> bool {
        probe_indexes(item, self.k, self.m)
            .into_iter()
            .all(|idx| self.bits[idx])
    }

    /// Get the number of bits set in the filter.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set, in [0, 1].
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Get the filter size in bits.
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash probes per operation.
    pub fn hash_count(&self) -> usize {
        self.k
    }
}
