//! Property lookup errors.

use ev_core::EvError;
use thiserror::Error;

/// Result type for property lookups.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur during property evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Non-physical values (negative pressure, temperature below 0 K, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the fitted range of a correlation.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<PropertyError> for EvError {
    fn from(err: PropertyError) -> Self {
        // Convert to EvError while preserving context
        match err {
            PropertyError::NonPhysical { what } => EvError::Invariant {
                what: Box::leak(format!("Non-physical property value: {}", what).into_boxed_str()),
            },
            PropertyError::OutOfRange { what } => EvError::InvalidArg {
                what: Box::leak(format!("Property value out of range: {}", what).into_boxed_str()),
            },
            PropertyError::InvalidArg { what } => EvError::InvalidArg {
                what: Box::leak(format!("Invalid property argument: {}", what).into_boxed_str()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PropertyError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = PropertyError::OutOfRange {
            what: "saturation pressure",
        };
        assert!(err.to_string().contains("saturation"));
    }

    #[test]
    fn error_to_ev_error() {
        let prop_err = PropertyError::OutOfRange { what: "pressure" };
        let ev_err: EvError = prop_err.into();
        assert!(matches!(ev_err, EvError::InvalidArg { .. }));
    }
}
