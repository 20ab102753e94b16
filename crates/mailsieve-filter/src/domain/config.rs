//! Filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use mailsieve_filter::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_items(50_000)
//!     .target_fpr(0.0000001)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

use super::parameters::{calculate_parameters, FilterParams};

/// Sizing configuration for a filter: how many distinct items are expected
/// and what false-positive probability to aim for.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected number of distinct items to insert (n)
    pub expected_items: usize,
    /// Target false-positive probability, in (0, 1) exclusive
    pub target_fpr: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            // One-in-ten-million false positives; precision costs memory
            target_fpr: 0.0000001,
            expected_items: 1,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation.
    pub fn new(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate that both sizing inputs are in the calculator's domain.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_items == 0 {
            return Err(FilterError::InvalidParameter(
                "expected item count must be positive".to_string(),
            ));
        }

        if !self.target_fpr.is_finite() || self.target_fpr <= 0.0 || self.target_fpr >= 1.0 {
            return Err(FilterError::InvalidParameter(format!(
                "target false-positive probability must be in (0, 1), got {}",
                self.target_fpr
            )));
        }

        Ok(())
    }

    /// Derive the bit-array size and hash count for this configuration.
    pub fn parameters(&self) -> Result<FilterParams, FilterError> {
        calculate_parameters(self.expected_items, self.target_fpr)
    }
}

/// Builder for [`FilterConfig`] with validation.
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of distinct items (must be positive).
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set the target false-positive probability (must be in (0, 1)).
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the config, validating all parameters.
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
        };

        config.validate()?;
        Ok(config)
    }
}
