//! Crystallization errors.

use ev_properties::PropertyError;
use thiserror::Error;

/// Result type for crystallization operations.
pub type CrystalResult<T> = Result<T, CrystalError>;

/// Errors from batch crystallization and vessel sizing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrystalError {
    /// A property lookup failed; the original context is preserved.
    #[error("Property lookup failed: {0}")]
    Property(#[from] PropertyError),

    /// Invalid batch or schedule input.
    #[error("Invalid crystallization input: {what}")]
    InvalidInput { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_error_keeps_context() {
        let prop = PropertyError::InvalidArg {
            what: "mass fraction",
        };
        let err: CrystalError = prop.into();
        assert!(err.to_string().contains("mass fraction"));
    }
}
