//! # mailsieve-filter
//!
//! Bloom filter core for probabilistic set membership: sub-linear memory, a
//! bounded false-positive rate, and zero false negatives.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: bit array plus seeded multi-probe insert/check
//!   - `calculate_parameters`: sizing from expected cardinality and a target
//!     false-positive probability
//!   - `FilterConfig` / `FilterConfigBuilder`: validated sizing configuration
//!   - `hash_functions`: the MurmurHash3 probe family
//!
//! I/O collaborators (file reading, output formatting) live outside this
//! crate; they hand the core byte strings to insert and query, and consume
//! one boolean verdict per query.
//!
//! ## Invariants
//!
//! - **No false negatives**: if an item was inserted, `check()` returns true,
//!   immediately and at any later point
//! - **Monotonic bits**: insertion only ever sets bits; the filter can only
//!   be emptied by constructing a new one
//!
//! ## Usage Example
//!
//! ```
//! use mailsieve_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::with_target_fpr(1000, 0.001)?;
//! filter.insert(b"alice@example.com");
//!
//! assert!(filter.check(b"alice@example.com"));
//! # Ok::<(), mailsieve_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    calculate_parameters, projected_fpr, BloomFilter, FilterConfig, FilterConfigBuilder,
    FilterParams,
};
pub use error::FilterError;
