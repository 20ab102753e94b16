//! Error types for the filter core

use thiserror::Error;

/// Errors raised by filter construction and parameter calculation.
///
/// `insert` and `check` are total over any byte string and never fail;
/// the only intrinsic failure mode is a parameter outside its domain,
/// rejected before any filter state exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
