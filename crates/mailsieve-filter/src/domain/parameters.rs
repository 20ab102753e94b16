//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- bits
//! - k = (m/n) * ln(2)         -- hash functions
//!
//! Both results are truncated toward zero, not rounded. This matches the
//! textbook formula as historically deployed here and is kept for
//! compatibility: for very small `n` the truncated `k` can come out 0, which
//! filter construction then rejects instead of clamping.

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Sizing derived from an expected item count and a target false-positive
/// probability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash probes per operation (k)
    pub hash_count: usize,
    /// False-positive probability projected for these parameters at the
    /// expected item count
    pub expected_fpr: f64,
}

/// Calculate filter parameters for an expected item count and target
/// false-positive probability.
///
/// # Arguments
/// * `expected_items` - Expected number of distinct items to insert (n)
/// * `target_fpr` - Desired false-positive probability, in (0, 1) exclusive
///
/// # Errors
/// `InvalidParameter` when `expected_items` is zero or `target_fpr` is not a
/// finite value strictly between 0 and 1.
pub fn calculate_parameters(
    expected_items: usize,
    target_fpr: f64,
) -> Result<FilterParams, FilterError> {
    if expected_items == 0 {
        return Err(FilterError::InvalidParameter(
            "expected item count must be positive".to_string(),
        ));
    }
    if !target_fpr.is_finite() || target_fpr <= 0.0 || target_fpr >= 1.0 {
        return Err(FilterError::InvalidParameter(format!(
            "target false-positive probability must be in (0, 1), got {}",
            target_fpr
        )));
    }

    let n = expected_items as f64;

    // m = -n * ln(p) / (ln(2)^2), truncated
    let m_exact = -n * target_fpr.ln() / (LN_2 * LN_2);
    // k = (m/n) * ln(2), from the untruncated m, then truncated
    let k_exact = (m_exact / n) * LN_2;

    let size_bits = m_exact as usize;
    let hash_count = k_exact as usize;

    Ok(FilterParams {
        size_bits,
        hash_count,
        expected_fpr: projected_fpr(size_bits, expected_items, hash_count),
    })
}

/// False-positive probability for a filter of `m` bits holding `n` items
/// under `k` probes.
///
/// Formula: (1 - e^(-kn/m))^k
pub fn projected_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
