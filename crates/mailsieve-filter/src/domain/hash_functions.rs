//! Hash probe family for the Bloom filter
//!
//! Uses MurmurHash3 with the probe index as the seed. A fixed seed per probe
//! keeps the family deterministic across calls and across runs, unlike the
//! standard library hasher whose per-process randomization would break
//! insert-then-query reproducibility in tests.

use std::io::Cursor;

/// Hash an item with MurmurHash3 under an explicit seed.
///
/// Distinct seeds give independently distributed outputs for the same item,
/// so probe `i` for item `x` does not systematically collide with probe `j`.
pub fn murmur_hash(item: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(item);

    // Use murmur3 128-bit hash and take the lower 64 bits
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Compute the `k` probe bit indexes for an item over an `m`-bit array.
///
/// Probe `i` is `murmur3(item, seed = i) mod m`.
pub fn probe_indexes(item: &[u8], k: usize, m: usize) -> Vec<usize> {
    (0..k)
        .map(|seed| (murmur_hash(item, seed as u32) % m as u64) as usize)
        .collect()
}
