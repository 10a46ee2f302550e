//! Installed-cost curves, capital and operating cost, payback.
//!
//! Power-law cost curves of the `C = a * S^b` form against the equipment's
//! sizing variable, a Lang-factor rollup to total capital investment, and a
//! utilities-only operating cost. The feed-flow study chains these onto the
//! sensitivity driver to find the cheapest throughput on an axis.

use crate::error::{AnalysisError, AnalysisResult};
use crate::sensitivity::{SensitivityCase, SweepVariable, run_sensitivity};
use crate::sweep::SweepAxis;
use ev_properties::PropertyModel;
use std::cmp::Ordering;
use tracing::info;

/// Lang factor from bare equipment cost to total capital investment.
pub const INSTALLATION_FACTOR: f64 = 1.55;

/// Evaporator body cost curve: `15000 * A^0.65` [EUR] on exchange area [m²].
pub const EVAPORATOR_COST_COEFF: f64 = 15_000.0;
pub const EVAPORATOR_COST_EXPONENT: f64 = 0.65;

/// Heat exchanger cost curve: `8000 * A^0.7` [EUR] on exchange area [m²].
pub const EXCHANGER_COST_COEFF: f64 = 8_000.0;
pub const EXCHANGER_COST_EXPONENT: f64 = 0.7;

/// Crystallizer cost curve: `25000 * V^0.6` [EUR] on working volume [m³].
pub const CRYSTALLIZER_COST_COEFF: f64 = 25_000.0;
pub const CRYSTALLIZER_COST_EXPONENT: f64 = 0.6;

/// Annual service for the operating-cost rollup [h/a].
pub const OPERATING_HOURS_PER_YEAR: f64 = 8_000.0;

/// Utility prices.
pub const STEAM_PRICE_EUR_PER_TON: f64 = 25.0;
pub const ELECTRICITY_PRICE_EUR_PER_KWH: f64 = 0.12;

/// Campaign length for the feed-flow study [h/a]: 24 h/day over a
/// 330-day season.
pub const CAMPAIGN_HOURS_PER_YEAR: f64 = 24.0 * 330.0;

const KG_PER_TON: f64 = 1_000.0;

fn ensure_size(what: &'static str, value: f64) -> AnalysisResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidEconomics { what });
    }
    Ok(())
}

/// Installed evaporator body cost [EUR].
pub fn evaporator_cost_eur(area_m2: f64) -> AnalysisResult<f64> {
    ensure_size("evaporator area must be non-negative and finite", area_m2)?;
    Ok(EVAPORATOR_COST_COEFF * area_m2.powf(EVAPORATOR_COST_EXPONENT))
}

/// Installed heat exchanger cost [EUR].
pub fn exchanger_cost_eur(area_m2: f64) -> AnalysisResult<f64> {
    ensure_size("exchanger area must be non-negative and finite", area_m2)?;
    Ok(EXCHANGER_COST_COEFF * area_m2.powf(EXCHANGER_COST_EXPONENT))
}

/// Installed crystallizer cost [EUR].
pub fn crystallizer_cost_eur(volume_m3: f64) -> AnalysisResult<f64> {
    ensure_size(
        "crystallizer volume must be non-negative and finite",
        volume_m3,
    )?;
    Ok(CRYSTALLIZER_COST_COEFF * volume_m3.powf(CRYSTALLIZER_COST_EXPONENT))
}

/// Total capital investment [EUR]: Lang factor on the sum of bare
/// equipment costs.
pub fn total_capital_investment_eur(equipment_costs_eur: &[f64]) -> AnalysisResult<f64> {
    let mut sum = 0.0;
    for &cost in equipment_costs_eur {
        ensure_size("equipment costs must be non-negative and finite", cost)?;
        sum += cost;
    }
    Ok(INSTALLATION_FACTOR * sum)
}

/// Annual utility cost [EUR/a] from steam demand [kg/h] and electric
/// drive load [kW], both over the standard 8000 h service year.
pub fn annual_operating_cost_eur(steam_kg_per_h: f64, electric_kw: f64) -> AnalysisResult<f64> {
    ensure_size("steam demand must be non-negative and finite", steam_kg_per_h)?;
    ensure_size("electric load must be non-negative and finite", electric_kw)?;
    let steam = steam_kg_per_h * OPERATING_HOURS_PER_YEAR * STEAM_PRICE_EUR_PER_TON / KG_PER_TON;
    let electricity = electric_kw * OPERATING_HOURS_PER_YEAR * ELECTRICITY_PRICE_EUR_PER_KWH;
    Ok(steam + electricity)
}

/// Simple payback [a]: capital over annual profit.
pub fn roi_years(capital_eur: f64, annual_profit_eur: f64) -> AnalysisResult<f64> {
    ensure_size("capital must be non-negative and finite", capital_eur)?;
    if !annual_profit_eur.is_finite() || annual_profit_eur <= 0.0 {
        return Err(AnalysisError::InvalidEconomics {
            what: "annual profit must be positive and finite",
        });
    }
    Ok(capital_eur / annual_profit_eur)
}

/// One feed flow on the cost axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedCostPoint {
    /// Feed flow [kg/h].
    pub feed_flow_kg_h: f64,
    /// Evaporator investment at this flow [EUR].
    pub invest_eur: f64,
    /// Campaign steam bill at this flow [EUR/a].
    pub annual_steam_cost_eur: f64,
    /// Investment plus steam bill [EUR].
    pub total_cost_eur: f64,
}

/// Feed-flow study output: the full curve and its cheapest point.
#[derive(Debug, Clone)]
pub struct FeedFlowStudy {
    pub points: Vec<FeedCostPoint>,
    pub best: FeedCostPoint,
}

/// Find the cheapest feed flow on `axis`.
///
/// Each candidate flow is solved and sized through the sensitivity driver;
/// its cost is the evaporator investment on total surface plus the campaign
/// steam bill. Ties keep the first (lowest-flow) point.
pub fn optimize_feed_flow(
    model: &dyn PropertyModel,
    case: &SensitivityCase,
    axis: &SweepAxis,
) -> AnalysisResult<FeedFlowStudy> {
    info!(points = axis.points(), "running feed-flow cost study");
    let sweep = run_sensitivity(model, case, SweepVariable::FeedFlowKgPerHour, axis)?;

    let mut points = Vec::with_capacity(sweep.points.len());
    for p in &sweep.points {
        let invest_eur = evaporator_cost_eur(p.total_area_m2)?;
        let annual_steam_cost_eur = p.steam_consumption_kg_h * CAMPAIGN_HOURS_PER_YEAR
            * STEAM_PRICE_EUR_PER_TON
            / KG_PER_TON;
        points.push(FeedCostPoint {
            feed_flow_kg_h: p.value,
            invest_eur,
            annual_steam_cost_eur,
            total_cost_eur: invest_eur + annual_steam_cost_eur,
        });
    }

    let best = points
        .iter()
        .copied()
        .min_by(|a, b| {
            a.total_cost_eur
                .partial_cmp(&b.total_cost_eur)
                .unwrap_or(Ordering::Greater)
        })
        .ok_or(AnalysisError::InvalidAxis {
            what: "feed-flow study produced no points",
        })?;

    Ok(FeedFlowStudy { points, best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaporator_cost_curve() {
        let c = evaporator_cost_eur(100.0).unwrap();
        assert!((c - 299_289.3).abs() < 1.0, "got {c}");
        assert_eq!(evaporator_cost_eur(0.0).unwrap(), 0.0);
    }

    #[test]
    fn exchanger_cost_curve() {
        let c = exchanger_cost_eur(50.0).unwrap();
        assert!(c > 123_000.0 && c < 124_500.0, "got {c}");
    }

    #[test]
    fn crystallizer_cost_curve() {
        let c = crystallizer_cost_eur(4.0).unwrap();
        assert!(c > 57_000.0 && c < 58_000.0, "got {c}");
    }

    #[test]
    fn capital_applies_the_lang_factor() {
        let tci = total_capital_investment_eur(&[1_000.0, 2_000.0]).unwrap();
        assert!((tci - 4_650.0).abs() < 1e-9);
    }

    #[test]
    fn operating_cost_splits_steam_and_power() {
        let opex = annual_operating_cost_eur(5_000.0, 150.0).unwrap();
        // 5000 kg/h * 8000 h * 25 EUR/t = 1 000 000; 150 kW * 8000 h * 0.12 = 144 000
        assert!((opex - 1_144_000.0).abs() < 1e-6);
    }

    #[test]
    fn payback_in_years() {
        let roi = roi_years(1.2e6, 300_000.0).unwrap();
        assert!((roi - 4.0).abs() < 1e-12);
    }

    #[test]
    fn bad_economic_inputs_rejected() {
        assert!(evaporator_cost_eur(-1.0).is_err());
        assert!(evaporator_cost_eur(f64::NAN).is_err());
        assert!(total_capital_investment_eur(&[1.0, f64::INFINITY]).is_err());
        assert!(annual_operating_cost_eur(-5.0, 0.0).is_err());
        assert!(roi_years(1.0e6, 0.0).is_err());
        assert!(roi_years(1.0e6, -2.0e5).is_err());
    }
}
