//! Steam consumption, steam economy, and the effect-count study.

use crate::error::{TrainError, TrainResult};
use crate::solver::TrainSolution;
use ev_core::units::MassFlowKgPerHour;
use ev_core::units::constants::SECONDS_PER_HOUR;

/// Latent heat of the external heating steam [J/kg], saturated at the
/// first-effect steam chest pressure.
pub const HEATING_STEAM_LATENT_HEAT_J_PER_KG: f64 = 2.15e6;

/// Steam economy gained per additional effect in the shortcut study.
const ECONOMY_PER_EFFECT: f64 = 0.9;

/// Indicative surface scaling A = 100 * n^0.8 in the shortcut study.
const SURFACE_BASE_M2: f64 = 100.0;
const SURFACE_EXPONENT: f64 = 0.8;

/// Steam-side performance of a solved train.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainPerformance {
    /// External steam demand [kg/h].
    pub steam_consumption_kg_h: f64,
    /// Vapor removed per unit of steam: `sum(V) / S`.
    pub steam_economy: f64,
}

/// Steam demand and economy for a solved train.
///
/// The first effect is the only consumer of external steam; downstream
/// effects run on reused vapor.
pub fn train_performance(solution: &TrainSolution) -> TrainPerformance {
    let q1_w = solution.effects.first().map_or(0.0, |e| e.heat_duty_w());
    let steam_consumption_kg_h = q1_w.abs() * SECONDS_PER_HOUR / HEATING_STEAM_LATENT_HEAT_J_PER_KG;
    let steam_economy = solution.total_vapor / steam_consumption_kg_h;

    TrainPerformance {
        steam_consumption_kg_h,
        steam_economy,
    }
}

/// One row of the effect-count study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectCountPoint {
    /// Number of effects.
    pub effects: usize,
    /// Shortcut steam economy, 0.9 per effect.
    pub steam_economy: f64,
    /// Indicative installed surface [m²].
    pub indicative_surface_m2: f64,
    /// Steam demand at this economy [kg/h].
    pub steam_demand_kg_h: f64,
}

/// Shortcut tabulation of economy, surface, and steam demand against the
/// number of effects. No solver call: this is the classic screening chart
/// used before committing to a train length.
pub fn effect_count_study(
    feed_flow: MassFlowKgPerHour,
    max_effects: usize,
) -> TrainResult<Vec<EffectCountPoint>> {
    if !feed_flow.is_finite() || feed_flow <= 0.0 {
        return Err(TrainError::InvalidInput {
            what: "feed flow must be positive and finite",
        });
    }
    if max_effects == 0 {
        return Err(TrainError::InvalidInput {
            what: "effect-count study needs at least one effect",
        });
    }

    Ok((1..=max_effects)
        .map(|n| {
            let economy = ECONOMY_PER_EFFECT * n as f64;
            EffectCountPoint {
                effects: n,
                steam_economy: economy,
                indicative_surface_m2: SURFACE_BASE_M2 * (n as f64).powf(SURFACE_EXPONENT),
                steam_demand_kg_h: feed_flow / economy,
            }
        })
        .collect())
}
