//! Analysis errors.

use ev_train::TrainError;
use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors from sweeps, sensitivity runs, and economics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Axis construction failed (bounds, point count).
    #[error("Invalid sweep axis: {what}")]
    InvalidAxis { what: &'static str },

    /// One sweep point failed; the run aborts and reports the point.
    #[error("Sweep point {point_index} (value {value}) failed: {source}")]
    PointFailed {
        point_index: usize,
        value: f64,
        source: TrainError,
    },

    /// A non-sweep train evaluation failed.
    #[error("Train evaluation failed: {0}")]
    Train(#[from] TrainError),

    /// Invalid economic input.
    #[error("Invalid economic input: {what}")]
    InvalidEconomics { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_failure_names_the_point() {
        let err = AnalysisError::PointFailed {
            point_index: 3,
            value: 0.005,
            source: TrainError::InvalidInput {
                what: "target concentration must lie in (0, 1)",
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("point 3"));
        assert!(msg.contains("0.005"));
    }
}
