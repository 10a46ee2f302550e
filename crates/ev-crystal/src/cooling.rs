//! Cooling schedules and sampled profiles.

use crate::error::{CrystalError, CrystalResult};
use ev_core::numeric::linspace;
use serde::{Deserialize, Serialize};

/// Temperature-versus-time law driving a batch cooldown.
///
/// Both laws are total: evaluation outside the nominal span extrapolates
/// rather than erroring, matching how operators probe "what if we kept
/// going" on a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// Constant ramp from `initial_c` to `final_c` over `duration_s`:
    /// `T(t) = T0 - ((T0 - Tf)/tau) * t`.
    Linear {
        initial_c: f64,
        final_c: f64,
        duration_s: f64,
    },
    /// Asymptotic approach to `final_c` at rate `rate_per_s`:
    /// `T(t) = Tf + (T0 - Tf) * exp(-beta * t)`.
    Exponential {
        initial_c: f64,
        final_c: f64,
        rate_per_s: f64,
    },
}

impl CoolingSchedule {
    /// Structural validation of the law parameters.
    pub fn validate(&self) -> CrystalResult<()> {
        match *self {
            CoolingSchedule::Linear {
                initial_c,
                final_c,
                duration_s,
            } => {
                if !initial_c.is_finite() || !final_c.is_finite() {
                    return Err(CrystalError::InvalidInput {
                        what: "cooling temperatures must be finite",
                    });
                }
                if !duration_s.is_finite() || duration_s <= 0.0 {
                    return Err(CrystalError::InvalidInput {
                        what: "linear cooling duration must be positive and finite",
                    });
                }
            }
            CoolingSchedule::Exponential {
                initial_c,
                final_c,
                rate_per_s,
            } => {
                if !initial_c.is_finite() || !final_c.is_finite() {
                    return Err(CrystalError::InvalidInput {
                        what: "cooling temperatures must be finite",
                    });
                }
                if !rate_per_s.is_finite() || rate_per_s < 0.0 {
                    return Err(CrystalError::InvalidInput {
                        what: "exponential cooling rate must be non-negative and finite",
                    });
                }
            }
        }
        Ok(())
    }

    /// Temperature [°C] at time `t_s` seconds.
    pub fn temperature_at(&self, t_s: f64) -> f64 {
        match *self {
            CoolingSchedule::Linear {
                initial_c,
                final_c,
                duration_s,
            } => initial_c - ((initial_c - final_c) / duration_s) * t_s,
            CoolingSchedule::Exponential {
                initial_c,
                final_c,
                rate_per_s,
            } => final_c + (initial_c - final_c) * (-rate_per_s * t_s).exp(),
        }
    }

    /// Sample the schedule on an even grid over `[0, horizon_s]`.
    pub fn sample(&self, horizon_s: f64, points: usize) -> CrystalResult<CoolingProfile> {
        self.validate()?;
        if !horizon_s.is_finite() || horizon_s <= 0.0 {
            return Err(CrystalError::InvalidInput {
                what: "sampling horizon must be positive and finite",
            });
        }
        if points < 2 {
            return Err(CrystalError::InvalidInput {
                what: "a profile needs at least two samples",
            });
        }

        let samples = linspace(0.0, horizon_s, points)
            .into_iter()
            .map(|t| ProfileSample {
                time_s: t,
                temperature_c: self.temperature_at(t),
            })
            .collect();
        Ok(CoolingProfile { samples })
    }
}

/// One point of a sampled cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub time_s: f64,
    pub temperature_c: f64,
}

/// Ordered (time, temperature) samples produced from a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingProfile {
    samples: Vec<ProfileSample>,
}

impl CoolingProfile {
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Batch span covered by the profile [s].
    pub fn duration_s(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time_s)
    }

    /// Temperature of the last sample [°C].
    pub fn final_temperature_c(&self) -> f64 {
        self.samples.last().map_or(f64::NAN, |s| s.temperature_c)
    }
}
