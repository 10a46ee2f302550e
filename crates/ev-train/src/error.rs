//! Train solver errors.

use ev_properties::PropertyError;
use thiserror::Error;

/// Result type for train operations.
pub type TrainResult<T> = Result<T, TrainError>;

/// Errors from building or solving an evaporation train.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    /// A property lookup failed; the original context is preserved.
    #[error("Property lookup failed: {0}")]
    Property(#[from] PropertyError),

    /// Invalid solver input (non-finite, empty profile, domain violation).
    #[error("Invalid train input: {what}")]
    InvalidInput { what: &'static str },

    /// A vapor allocation policy could not produce a split.
    #[error("Vapor allocation failed: {what}")]
    Allocation { what: &'static str },
}
