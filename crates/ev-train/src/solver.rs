//! Forward-feed evaporation train solver.
//!
//! Closed-form single pass: the overall solute balance pins the final
//! liquor rate, the allocation policy fixes per-effect vapor duties, and
//! the recurrence then walks the effects in flow order. No iteration, no
//! simultaneous equations.

use crate::allocation::VaporSplit;
use crate::error::{TrainError, TrainResult};
use crate::feed::{FeedStream, PressureProfile};
use ev_core::units::constants::SECONDS_PER_HOUR;
use ev_core::units::{MassFlowKgPerHour, MassFraction, Power, Temperature, celsius, watt};
use ev_properties::PropertyModel;
use tracing::debug;
use uom::si::power::watt as watt_unit;
use uom::si::thermodynamic_temperature::degree_celsius;

/// First-effect thermal efficiency applied to the external steam duty.
pub const EFFECT_ONE_EFFICIENCY: f64 = 0.97;

/// Loss factor on vapor reused as heating medium in downstream effects.
pub const VAPOR_REUSE_LOSS: f64 = 1.03;

/// Solved operating point of one effect.
///
/// The feed itself is not an effect: `index` 0 is the first evaporator
/// body, and every quantity refers to the liquor leaving it.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectState {
    /// Effect position along the train, 0-based.
    pub index: usize,
    /// Liquor leaving the effect [kg/h].
    pub liquid_flow: MassFlowKgPerHour,
    /// Vapor raised in the effect [kg/h].
    pub vapor_flow: MassFlowKgPerHour,
    /// Solute mass fraction of the leaving liquor.
    pub concentration: MassFraction,
    /// Boiling temperature of the liquor (saturation + elevation).
    pub temperature: Temperature,
    /// Heat duty of the effect.
    pub heat_duty: Power,
}

impl EffectState {
    /// Boiling temperature in °C.
    pub fn temperature_c(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }

    /// Heat duty in watts.
    pub fn heat_duty_w(&self) -> f64 {
        self.heat_duty.get::<watt_unit>()
    }
}

/// Solved forward-feed train.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSolution {
    /// Per-effect states in flow order.
    pub effects: Vec<EffectState>,
    /// Total vapor removed across the train [kg/h].
    pub total_vapor: MassFlowKgPerHour,
    /// Concentrated liquor leaving the last effect [kg/h].
    pub final_liquid: MassFlowKgPerHour,
}

impl TrainSolution {
    /// Solute mass fraction of the product liquor.
    pub fn final_concentration(&self) -> MassFraction {
        self.effects.last().map_or(0.0, |e| e.concentration)
    }

    /// Feed minus everything leaving; zero up to rounding when the
    /// balance closes.
    pub fn mass_closure(&self, feed: &FeedStream) -> f64 {
        let out: f64 = self.effects.iter().map(|e| e.vapor_flow).sum::<f64>() + self.final_liquid;
        feed.mass_flow() - out
    }

    /// Boiling temperatures along the train [°C].
    pub fn temperatures_c(&self) -> Vec<f64> {
        self.effects.iter().map(|e| e.temperature_c()).collect()
    }

    /// Heat duties along the train [W].
    pub fn duties_w(&self) -> Vec<f64> {
        self.effects.iter().map(|e| e.heat_duty_w()).collect()
    }
}

// Per-effect scratch carried between the flow pass and the duty pass.
struct EffectScratch {
    liquid: f64,
    vapor: f64,
    concentration: f64,
    temperature_c: f64,
    latent_heat: f64,
    specific_heat: f64,
}

/// Solve a forward-feed train.
///
/// The recurrence, with `L_0 = F` and `x_0 = xF`:
///
/// ```text
/// L_i = L_{i-1} - V_i
/// x_i = L_{i-1} * x_{i-1} / L_i
/// T_i = Tsat(P_i) + BPE(100 * x_i)
/// Q_1 = (L_1 cp_1 T_1 + V_1 lambda_1 - F cp_F T_F) / 0.97
/// Q_i = V_{i-1} lambda_{i-1} / 1.03        for i > 1
/// ```
///
/// Targets at or below the feed concentration are not rejected: the
/// recurrence still runs and returns a physically meaningless but finite
/// train (negative vapor duties), which is the caller's signal. Property
/// lookup failures propagate unmodified.
pub fn solve_train(
    model: &dyn PropertyModel,
    feed: &FeedStream,
    target_concentration: MassFraction,
    pressures: &PressureProfile,
    split: &dyn VaporSplit,
) -> TrainResult<TrainSolution> {
    if !target_concentration.is_finite()
        || target_concentration <= 0.0
        || target_concentration >= 1.0
    {
        return Err(TrainError::InvalidInput {
            what: "target concentration must lie in (0, 1)",
        });
    }

    let f = feed.mass_flow();
    let x_feed = feed.concentration();
    let n = pressures.effects();

    // Overall solute balance
    let final_liquid = f * x_feed / target_concentration;
    let total_vapor = f - final_liquid;
    let vapor = split.allocate(total_vapor, n)?;

    debug!(
        model = model.name(),
        policy = split.name(),
        effects = n,
        total_vapor,
        final_liquid,
        "train mass balance"
    );

    // Flow pass
    let mut scratch: Vec<EffectScratch> = Vec::with_capacity(n);
    let mut liquid_prev = f;
    let mut x_prev = x_feed;
    for (i, &p) in pressures.pressures().iter().enumerate() {
        let liquid = liquid_prev - vapor[i];
        let concentration = liquid_prev * x_prev / liquid;
        let props = model.effect_properties(p, concentration)?;
        let temperature_c = props.saturation_temperature.get::<degree_celsius>()
            + props.boiling_point_elevation;
        debug!(effect = i, liquid, concentration, temperature_c, "effect state");

        scratch.push(EffectScratch {
            liquid,
            vapor: vapor[i],
            concentration,
            temperature_c,
            latent_heat: props.latent_heat,
            specific_heat: props.specific_heat,
        });
        liquid_prev = liquid;
        x_prev = concentration;
    }

    // Duty pass; the balance is per hour of feed, stored in watts
    let feed_cp = model.solution_specific_heat(x_feed)?;
    let feed_t_c = feed.temperature_c();
    let effects = scratch
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let duty_j_per_h = if i == 0 {
                (e.liquid * e.specific_heat * e.temperature_c + e.vapor * e.latent_heat
                    - f * feed_cp * feed_t_c)
                    / EFFECT_ONE_EFFICIENCY
            } else {
                let prev = &scratch[i - 1];
                prev.vapor * prev.latent_heat / VAPOR_REUSE_LOSS
            };

            EffectState {
                index: i,
                liquid_flow: e.liquid,
                vapor_flow: e.vapor,
                concentration: e.concentration,
                temperature: celsius(e.temperature_c),
                heat_duty: watt(duty_j_per_h / SECONDS_PER_HOUR),
            }
        })
        .collect();

    Ok(TrainSolution {
        effects,
        total_vapor,
        final_liquid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{EqualSplit, WeightedSplit};
    use ev_core::units::{bar, celsius, pa};
    use ev_properties::SucroseModel;

    fn reference_feed() -> FeedStream {
        FeedStream::new(20_000.0, 0.15, celsius(85.0)).unwrap()
    }

    fn reference_profile() -> PressureProfile {
        PressureProfile::new(vec![bar(1.5), bar(0.6), bar(0.15)]).unwrap()
    }

    #[test]
    fn reference_train_flows() {
        let model = SucroseModel::new();
        let sol = solve_train(
            &model,
            &reference_feed(),
            0.65,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap();

        assert!((sol.final_liquid - 4615.3846).abs() < 1e-3);
        assert!((sol.total_vapor - 15_384.6154).abs() < 1e-3);
        for e in &sol.effects {
            assert!((e.vapor_flow - 5128.2051).abs() < 1e-3);
        }
    }

    #[test]
    fn reference_train_concentration_path() {
        let model = SucroseModel::new();
        let sol = solve_train(
            &model,
            &reference_feed(),
            0.65,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap();

        let x: Vec<f64> = sol.effects.iter().map(|e| e.concentration).collect();
        assert!((x[0] - 0.201_724).abs() < 1e-5);
        assert!((x[1] - 0.307_895).abs() < 1e-5);
        // the last effect hits the target exactly by construction
        assert!((x[2] - 0.65).abs() < 1e-12);
        assert!(x.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn reference_train_temperatures_track_pressure_and_bpe() {
        let model = SucroseModel::new();
        let sol = solve_train(
            &model,
            &reference_feed(),
            0.65,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap();

        let t = sol.temperatures_c();
        assert!(t[0] > 121.0 && t[0] < 122.0, "T1 = {}", t[0]);
        assert!(t[1] > 100.8 && t[1] < 101.8, "T2 = {}", t[1]);
        assert!(t[2] > 86.0 && t[2] < 87.0, "T3 = {}", t[2]);
    }

    #[test]
    fn reference_train_duties() {
        let model = SucroseModel::new();
        let sol = solve_train(
            &model,
            &reference_feed(),
            0.65,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap();

        let q = sol.duties_w();
        assert!(q[0] > 3.25e6 && q[0] < 3.45e6, "Q1 = {}", q[0]);
        assert!(q[1] > 2.9e6 && q[1] < 3.2e6, "Q2 = {}", q[1]);
        assert!(q[2] > 3.0e6 && q[2] < 3.3e6, "Q3 = {}", q[2]);
    }

    #[test]
    fn mass_balance_closes() {
        let model = SucroseModel::new();
        let feed = reference_feed();
        let sol = solve_train(&model, &feed, 0.65, &reference_profile(), &EqualSplit).unwrap();
        assert!(sol.mass_closure(&feed).abs() < 1e-8);
    }

    #[test]
    fn single_effect_train() {
        let model = SucroseModel::new();
        let profile = PressureProfile::new(vec![bar(0.5)]).unwrap();
        let sol = solve_train(&model, &reference_feed(), 0.3, &profile, &EqualSplit).unwrap();

        assert_eq!(sol.effects.len(), 1);
        assert!((sol.final_concentration() - 0.3).abs() < 1e-12);
        assert!((sol.effects[0].vapor_flow - sol.total_vapor).abs() < 1e-9);
    }

    #[test]
    fn weighted_split_changes_path_not_endpoints() {
        let model = SucroseModel::new();
        let feed = reference_feed();
        let policy = WeightedSplit::new(vec![1.0, 2.0, 3.0]).unwrap();
        let sol = solve_train(&model, &feed, 0.65, &reference_profile(), &policy).unwrap();

        assert!((sol.final_concentration() - 0.65).abs() < 1e-12);
        assert!(sol.mass_closure(&feed).abs() < 1e-8);
        assert!(sol.effects[2].vapor_flow > sol.effects[0].vapor_flow);
    }

    #[test]
    fn infeasible_target_flows_through() {
        // target below feed concentration: dilution, not rejection
        let model = SucroseModel::new();
        let sol = solve_train(
            &model,
            &reference_feed(),
            0.10,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap();

        assert!(sol.total_vapor < 0.0);
        for e in &sol.effects {
            assert!(e.vapor_flow < 0.0);
            assert!(e.concentration.is_finite());
        }
        let x: Vec<f64> = sol.effects.iter().map(|e| e.concentration).collect();
        assert!(x.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn bad_target_rejected() {
        let model = SucroseModel::new();
        let err = solve_train(
            &model,
            &reference_feed(),
            1.2,
            &reference_profile(),
            &EqualSplit,
        )
        .unwrap_err();
        assert!(matches!(err, TrainError::InvalidInput { .. }));
    }

    #[test]
    fn property_errors_propagate_unmodified() {
        let model = SucroseModel::new();
        // 500 Pa is below the saturation service range
        let profile = PressureProfile::new(vec![pa(500.0)]).unwrap();
        let err = solve_train(&model, &reference_feed(), 0.3, &profile, &EqualSplit).unwrap_err();
        assert!(matches!(err, TrainError::Property(_)));
    }
}
