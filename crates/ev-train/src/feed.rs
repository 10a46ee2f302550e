//! Feed stream and effect pressure profile inputs.

use crate::error::{TrainError, TrainResult};
use ev_core::units::{MassFlowKgPerHour, MassFraction, Pressure, Temperature};
use uom::si::thermodynamic_temperature::degree_celsius;

/// Liquor feed entering the first effect.
///
/// Flows are carried in kg/h (process convention); temperature is a full
/// uom quantity so call sites choose their own scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedStream {
    mass_flow: MassFlowKgPerHour,
    concentration: MassFraction,
    temperature: Temperature,
}

impl FeedStream {
    /// Create a feed stream.
    ///
    /// Validates that the flow is positive and finite, the solute mass
    /// fraction lies in (0, 1), and the temperature is finite and above
    /// absolute zero.
    pub fn new(
        mass_flow: MassFlowKgPerHour,
        concentration: MassFraction,
        temperature: Temperature,
    ) -> TrainResult<Self> {
        if !mass_flow.is_finite() || mass_flow <= 0.0 {
            return Err(TrainError::InvalidInput {
                what: "feed mass flow must be positive and finite",
            });
        }
        if !concentration.is_finite() || concentration <= 0.0 || concentration >= 1.0 {
            return Err(TrainError::InvalidInput {
                what: "feed concentration must lie in (0, 1)",
            });
        }
        let t_val = temperature.value;
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(TrainError::InvalidInput {
                what: "feed temperature must be positive and finite",
            });
        }

        Ok(Self {
            mass_flow,
            concentration,
            temperature,
        })
    }

    /// Get feed mass flow [kg/h].
    pub fn mass_flow(&self) -> MassFlowKgPerHour {
        self.mass_flow
    }

    /// Get feed solute mass fraction.
    pub fn concentration(&self) -> MassFraction {
        self.concentration
    }

    /// Get feed temperature.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Get feed temperature in °C.
    pub fn temperature_c(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }
}

/// Operating pressure of each effect, first effect first.
///
/// Forward feed normally runs the profile downhill (decreasing pressure),
/// but that is an operating choice, not a structural one, so the profile
/// only checks that each entry is a usable pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureProfile {
    stages: Vec<Pressure>,
}

impl PressureProfile {
    /// Create a profile from one pressure per effect.
    pub fn new(stages: Vec<Pressure>) -> TrainResult<Self> {
        if stages.is_empty() {
            return Err(TrainError::InvalidInput {
                what: "pressure profile must contain at least one effect",
            });
        }
        for p in &stages {
            if !p.value.is_finite() || p.value <= 0.0 {
                return Err(TrainError::InvalidInput {
                    what: "effect pressures must be positive and finite",
                });
            }
        }
        Ok(Self { stages })
    }

    /// Number of effects.
    pub fn effects(&self) -> usize {
        self.stages.len()
    }

    /// Per-effect pressures, first effect first.
    pub fn pressures(&self) -> &[Pressure] {
        &self.stages
    }

    /// Whether the profile decreases monotonically along the train.
    pub fn is_decreasing(&self) -> bool {
        self.stages.windows(2).all(|w| w[1].value < w[0].value)
    }

    /// Copy of the profile with the first-effect pressure replaced.
    /// Used by sensitivity sweeps.
    pub fn with_first_pressure(&self, p: Pressure) -> TrainResult<Self> {
        let mut stages = self.stages.clone();
        stages[0] = p;
        Self::new(stages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::units::{bar, celsius};

    #[test]
    fn feed_accessors() {
        let feed = FeedStream::new(20_000.0, 0.15, celsius(85.0)).unwrap();
        assert_eq!(feed.mass_flow(), 20_000.0);
        assert_eq!(feed.concentration(), 0.15);
        assert!((feed.temperature_c() - 85.0).abs() < 1e-9);
    }

    #[test]
    fn feed_rejects_bad_inputs() {
        assert!(FeedStream::new(0.0, 0.15, celsius(85.0)).is_err());
        assert!(FeedStream::new(-5.0, 0.15, celsius(85.0)).is_err());
        assert!(FeedStream::new(f64::NAN, 0.15, celsius(85.0)).is_err());
        assert!(FeedStream::new(20_000.0, 0.0, celsius(85.0)).is_err());
        assert!(FeedStream::new(20_000.0, 1.0, celsius(85.0)).is_err());
        assert!(FeedStream::new(20_000.0, 0.15, celsius(-300.0)).is_err());
    }

    #[test]
    fn profile_shape() {
        let profile = PressureProfile::new(vec![bar(1.5), bar(0.6), bar(0.15)]).unwrap();
        assert_eq!(profile.effects(), 3);
        assert!(profile.is_decreasing());

        let uphill = PressureProfile::new(vec![bar(0.5), bar(1.5)]).unwrap();
        assert!(!uphill.is_decreasing());
    }

    #[test]
    fn profile_rejects_bad_inputs() {
        assert!(PressureProfile::new(vec![]).is_err());
        assert!(PressureProfile::new(vec![bar(1.5), bar(-0.1)]).is_err());
        assert!(PressureProfile::new(vec![bar(f64::INFINITY)]).is_err());
    }

    #[test]
    fn first_pressure_substitution() {
        let profile = PressureProfile::new(vec![bar(1.5), bar(0.6)]).unwrap();
        let swapped = profile.with_first_pressure(bar(2.0)).unwrap();
        assert!((swapped.pressures()[0].value - 200_000.0).abs() < 1e-6);
        assert_eq!(swapped.pressures()[1], profile.pressures()[1]);
    }
}
