//! Serializable report shapes for `--json` output.

use ev_crystal::CoolingSchedule;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EffectRow {
    pub effect: usize,
    pub liquid_flow_kg_h: f64,
    pub vapor_flow_kg_h: f64,
    pub concentration: f64,
    pub temperature_c: f64,
    pub heat_duty_kw: f64,
    pub driving_force_k: f64,
    pub area_m2: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulateReport {
    pub effects: Vec<EffectRow>,
    pub total_vapor_kg_h: f64,
    pub product_flow_kg_h: f64,
    pub final_concentration: f64,
    pub total_area_m2: f64,
    /// 0-based indices of effects with a collapsed driving force.
    pub pinched_effects: Vec<usize>,
    pub steam_consumption_kg_h: f64,
    pub steam_economy: f64,
    pub evaporator_cost_eur: f64,
    pub total_capital_eur: f64,
    pub annual_operating_cost_eur: f64,
    pub payback_years: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchStateRow {
    pub time_s: f64,
    pub temperature_c: f64,
    pub solubility_g_per_100g: f64,
    pub supersaturation: f64,
    pub nucleation_rate_per_m3_s: f64,
    pub growth_rate_m_per_s: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrystallizeReport {
    pub schedule: CoolingSchedule,
    pub states: Vec<BatchStateRow>,
    pub final_supersaturation: f64,
    pub peak_supersaturation: f64,
    pub mean_size_um: f64,
    pub population_density_per_m4: f64,
    pub size_cv_pct: f64,
    pub vessel_volume_m3: f64,
    pub agitation_power_w: f64,
    pub crystallizer_cost_eur: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub value: f64,
    pub temperatures_c: Vec<f64>,
    pub total_area_m2: f64,
    pub steam_consumption_kg_h: f64,
    pub steam_economy: f64,
    pub pinched_effects: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub variable: String,
    pub points: Vec<SweepRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectCountRow {
    pub effects: usize,
    pub steam_economy: f64,
    pub indicative_surface_m2: f64,
    pub steam_demand_kg_h: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectCountReport {
    pub feed_flow_kg_h: f64,
    pub rows: Vec<EffectCountRow>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptimizeRow {
    pub feed_flow_kg_h: f64,
    pub invest_eur: f64,
    pub annual_steam_cost_eur: f64,
    pub total_cost_eur: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeReport {
    pub points: Vec<OptimizeRow>,
    pub best: OptimizeRow,
}
