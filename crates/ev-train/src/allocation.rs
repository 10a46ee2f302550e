//! Vapor allocation policies.
//!
//! The overall balance fixes the total vapor to remove; how that duty is
//! shared between effects is a design policy. The classic shortcut assumes
//! an equal split, but rating studies weight later effects harder, so the
//! split sits behind a trait and the solver takes any implementation.

use crate::error::{TrainError, TrainResult};
use ev_core::units::MassFlowKgPerHour;

/// Policy distributing the total evaporated vapor across effects.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel
/// sweep evaluation. The total may be negative (infeasible concentration
/// targets flow through the recurrence unchecked), so policies only
/// validate their own structure, never the sign of the duty.
pub trait VaporSplit: Send + Sync {
    /// Get the policy name (for debugging/logging).
    fn name(&self) -> &str;

    /// Split `total_vapor` [kg/h] over `effects` stages.
    ///
    /// The returned vector has exactly `effects` entries summing to
    /// `total_vapor`.
    fn allocate(
        &self,
        total_vapor: MassFlowKgPerHour,
        effects: usize,
    ) -> TrainResult<Vec<MassFlowKgPerHour>>;
}

/// Equal vapor duty in every effect (the shortcut design assumption).
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualSplit;

impl VaporSplit for EqualSplit {
    fn name(&self) -> &str {
        "equal split"
    }

    fn allocate(
        &self,
        total_vapor: MassFlowKgPerHour,
        effects: usize,
    ) -> TrainResult<Vec<MassFlowKgPerHour>> {
        if effects == 0 {
            return Err(TrainError::Allocation {
                what: "cannot split vapor over zero effects",
            });
        }
        Ok(vec![total_vapor / effects as f64; effects])
    }
}

/// Vapor duty proportional to fixed per-effect weights.
#[derive(Debug, Clone)]
pub struct WeightedSplit {
    weights: Vec<f64>,
}

impl WeightedSplit {
    /// Create a weighted policy; weights must be positive and finite.
    pub fn new(weights: Vec<f64>) -> TrainResult<Self> {
        if weights.is_empty() {
            return Err(TrainError::Allocation {
                what: "weighted split needs at least one weight",
            });
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(TrainError::Allocation {
                what: "split weights must be positive and finite",
            });
        }
        Ok(Self { weights })
    }
}

impl VaporSplit for WeightedSplit {
    fn name(&self) -> &str {
        "weighted split"
    }

    fn allocate(
        &self,
        total_vapor: MassFlowKgPerHour,
        effects: usize,
    ) -> TrainResult<Vec<MassFlowKgPerHour>> {
        if effects != self.weights.len() {
            return Err(TrainError::Allocation {
                what: "weight count must match effect count",
            });
        }
        let sum: f64 = self.weights.iter().sum();
        Ok(self
            .weights
            .iter()
            .map(|w| total_vapor * w / sum)
            .collect())
    }
}
