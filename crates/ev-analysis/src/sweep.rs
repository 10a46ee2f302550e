//! Sweep axes.

use crate::error::{AnalysisError, AnalysisResult};
use ev_core::numeric::linspace;

/// Linear axis for a parametric study.
///
/// At least two points, distinct finite bounds; the generated grid hits
/// both bounds exactly. Descending axes are allowed (start > end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis {
    start: f64,
    end: f64,
    points: usize,
}

impl SweepAxis {
    pub fn new(start: f64, end: f64, points: usize) -> AnalysisResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AnalysisError::InvalidAxis {
                what: "axis bounds must be finite",
            });
        }
        if start == end {
            return Err(AnalysisError::InvalidAxis {
                what: "axis bounds must be distinct",
            });
        }
        if points < 2 {
            return Err(AnalysisError::InvalidAxis {
                what: "axis needs at least two points",
            });
        }
        Ok(Self { start, end, points })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn points(&self) -> usize {
        self.points
    }

    /// Materialize the grid.
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }
}
