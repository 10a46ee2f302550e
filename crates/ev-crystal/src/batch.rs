//! Batch evaluation of kinetics along a cooling profile.

use crate::cooling::CoolingSchedule;
use crate::error::{CrystalError, CrystalResult};
use crate::kinetics::{
    SIZE_COEFFICIENT_OF_VARIATION_PCT, growth_rate, mean_crystal_size_m, nucleation_rate,
    population_density,
};
use crate::solubility::{solubility, supersaturation};

/// Kinetic snapshot at one profile sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystallizationState {
    pub time_s: f64,
    pub temperature_c: f64,
    /// Equilibrium solubility at the sample temperature [g/100 g water].
    pub solubility_g_per_100g: f64,
    /// Relative supersaturation, unclamped.
    pub supersaturation: f64,
    /// Nucleation rate [#/(m³·s)].
    pub nucleation_rate: f64,
    /// Growth rate [m/s].
    pub growth_rate_m_per_s: f64,
}

/// Full batch record: per-sample states plus end-of-batch summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchKinetics {
    /// States in time order, one per profile sample.
    pub states: Vec<CrystallizationState>,
    /// Supersaturation at the end of the cooldown.
    pub final_supersaturation: f64,
    /// Mean crystal size from the final growth rate over the batch [m].
    pub mean_size_m: f64,
    /// Nuclei population density from the final rates [#/m⁴].
    pub population_density: f64,
    /// Nominal coefficient of variation of the size distribution [%].
    pub size_cv_pct: f64,
}

impl BatchKinetics {
    /// Largest supersaturation seen along the cooldown.
    pub fn peak_supersaturation(&self) -> f64 {
        self.states
            .iter()
            .map(|s| s.supersaturation)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Evaluate nucleation and growth along a cooling schedule.
///
/// The liquor concentration and magma concentration stay fixed over the
/// batch: there is no solute depletion feedback, so each sample is an
/// independent algebraic evaluation of the rate laws at that temperature.
pub fn evaluate_batch(
    schedule: &CoolingSchedule,
    horizon_s: f64,
    samples: usize,
    liquor_concentration_g_per_100g: f64,
    magma_concentration_kg_m3: f64,
) -> CrystalResult<BatchKinetics> {
    if !liquor_concentration_g_per_100g.is_finite() || liquor_concentration_g_per_100g <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "liquor concentration must be positive and finite",
        });
    }

    let profile = schedule.sample(horizon_s, samples)?;
    let mut states = Vec::with_capacity(profile.len());
    for sample in profile.samples() {
        let c_star = solubility(sample.temperature_c);
        let s = supersaturation(liquor_concentration_g_per_100g, sample.temperature_c);
        let b = nucleation_rate(s, magma_concentration_kg_m3)?;
        let g = growth_rate(s, sample.temperature_c)?;
        states.push(CrystallizationState {
            time_s: sample.time_s,
            temperature_c: sample.temperature_c,
            solubility_g_per_100g: c_star,
            supersaturation: s,
            nucleation_rate: b,
            growth_rate_m_per_s: g,
        });
    }

    // summary from the end-of-batch state
    let last = states
        .last()
        .copied()
        .ok_or(CrystalError::InvalidInput {
            what: "profile produced no samples",
        })?;

    Ok(BatchKinetics {
        final_supersaturation: last.supersaturation,
        mean_size_m: mean_crystal_size_m(last.growth_rate_m_per_s, horizon_s),
        population_density: population_density(
            last.nucleation_rate,
            last.growth_rate_m_per_s,
            horizon_s,
        ),
        size_cv_pct: SIZE_COEFFICIENT_OF_VARIATION_PCT,
        states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_schedule() -> CoolingSchedule {
        CoolingSchedule::Linear {
            initial_c: 70.0,
            final_c: 35.0,
            duration_s: 14_400.0,
        }
    }

    #[test]
    fn reference_batch_stays_undersaturated() {
        // C = 75 g/100 g never crosses the solubility curve on 70 -> 35
        let run = evaluate_batch(&reference_schedule(), 14_400.0, 100, 75.0, 50.0).unwrap();

        assert_eq!(run.states.len(), 100);
        assert!((run.final_supersaturation - (-0.002_717)).abs() < 1e-5);
        assert!(run.peak_supersaturation() < 0.0);
        // floored kinetics keep rates finite and the size tiny
        for s in &run.states {
            assert!(s.nucleation_rate.is_finite() && s.nucleation_rate >= 0.0);
            assert!(s.growth_rate_m_per_s.is_finite() && s.growth_rate_m_per_s > 0.0);
        }
        assert!(run.mean_size_m < 1e-10);
        assert_eq!(run.size_cv_pct, 35.0);
    }

    #[test]
    fn richer_liquor_crosses_into_supersaturation() {
        let run = evaluate_batch(&reference_schedule(), 14_400.0, 100, 80.0, 50.0).unwrap();

        assert!(run.states[0].supersaturation < 0.0);
        assert!((run.final_supersaturation - 0.063_77).abs() < 1e-4);
        // cooling at fixed concentration only drives S upward
        for pair in run.states.windows(2) {
            assert!(pair[1].supersaturation >= pair[0].supersaturation);
        }
    }

    #[test]
    fn timeline_matches_the_profile() {
        let run = evaluate_batch(&reference_schedule(), 14_400.0, 50, 75.0, 50.0).unwrap();
        assert_eq!(run.states[0].time_s, 0.0);
        assert_eq!(run.states[49].time_s, 14_400.0);
        assert!((run.states[0].temperature_c - 70.0).abs() < 1e-12);
        assert!((run.states[49].temperature_c - 35.0).abs() < 1e-12);
    }

    #[test]
    fn bad_batch_inputs_rejected() {
        let schedule = reference_schedule();
        assert!(evaluate_batch(&schedule, 14_400.0, 100, 0.0, 50.0).is_err());
        assert!(evaluate_batch(&schedule, 14_400.0, 100, f64::NAN, 50.0).is_err());
        assert!(evaluate_batch(&schedule, 14_400.0, 100, 75.0, -1.0).is_err());
        assert!(evaluate_batch(&schedule, 0.0, 100, 75.0, 50.0).is_err());
        assert!(evaluate_batch(&schedule, 14_400.0, 1, 75.0, 50.0).is_err());
    }
}
