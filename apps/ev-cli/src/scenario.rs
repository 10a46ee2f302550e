//! Scenario file schema.
//!
//! A scenario is one YAML document with three sections, each optional;
//! missing sections and missing fields fall back to the reference case, so
//! an empty file (or no file at all) runs the full demonstration plant.

use crate::error::AppResult;
use ev_analysis::SensitivityCase;
use ev_core::units::{bar, celsius};
use ev_crystal::CoolingSchedule;
use ev_train::{FeedStream, PressureProfile};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Evaporation train inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainScenario {
    pub feed_flow_kg_h: f64,
    pub feed_concentration: f64,
    pub feed_temperature_c: f64,
    pub target_concentration: f64,
    pub effect_pressures_bar: Vec<f64>,
    pub film_coefficients_w_m2k: Vec<f64>,
    pub fouling_resistance_m2k_w: f64,
    pub steam_temperature_c: f64,
}

impl Default for TrainScenario {
    fn default() -> Self {
        Self {
            feed_flow_kg_h: 20_000.0,
            feed_concentration: 0.15,
            feed_temperature_c: 85.0,
            target_concentration: 0.65,
            effect_pressures_bar: vec![1.5, 0.6, 0.15],
            film_coefficients_w_m2k: vec![2500.0, 2200.0, 1800.0],
            fouling_resistance_m2k_w: 2.0e-4,
            steam_temperature_c: 120.0,
        }
    }
}

impl TrainScenario {
    pub fn feed(&self) -> AppResult<FeedStream> {
        Ok(FeedStream::new(
            self.feed_flow_kg_h,
            self.feed_concentration,
            celsius(self.feed_temperature_c),
        )?)
    }

    pub fn pressures(&self) -> AppResult<PressureProfile> {
        Ok(PressureProfile::new(
            self.effect_pressures_bar.iter().map(|&p| bar(p)).collect(),
        )?)
    }

    /// Base case for the sweep and optimization drivers.
    pub fn sensitivity_case(&self) -> AppResult<SensitivityCase> {
        Ok(SensitivityCase {
            feed: self.feed()?,
            target_concentration: self.target_concentration,
            pressures: self.pressures()?,
            steam_temperature_c: self.steam_temperature_c,
            film_coefficients: self.film_coefficients_w_m2k.clone(),
            fouling_resistance: self.fouling_resistance_m2k_w,
        })
    }
}

/// Batch crystallization inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatchScenario {
    pub batch_mass_kg: f64,
    /// Solute mass fraction of the batch liquor, for density.
    pub liquor_mass_fraction: f64,
    /// Liquor concentration for the rate laws [g/100 g water].
    pub liquor_concentration_g_per_100g: f64,
    pub magma_concentration_kg_m3: f64,
    pub crystallizer_temperature_c: f64,
    pub cooling: CoolingSchedule,
    pub horizon_s: f64,
    pub samples: usize,
}

impl Default for BatchScenario {
    fn default() -> Self {
        Self {
            batch_mass_kg: 5_000.0,
            liquor_mass_fraction: 0.65,
            liquor_concentration_g_per_100g: 75.0,
            magma_concentration_kg_m3: 50.0,
            crystallizer_temperature_c: 60.0,
            cooling: CoolingSchedule::Linear {
                initial_c: 70.0,
                final_c: 35.0,
                duration_s: 14_400.0,
            },
            horizon_s: 14_400.0,
            samples: 100,
        }
    }
}

/// Cost model inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EconomicsScenario {
    pub electric_load_kw: f64,
    pub annual_profit_eur: f64,
}

impl Default for EconomicsScenario {
    fn default() -> Self {
        Self {
            electric_load_kw: 150.0,
            annual_profit_eur: 300_000.0,
        }
    }
}

/// Full scenario document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub train: TrainScenario,
    pub batch: BatchScenario,
    pub economics: EconomicsScenario,
}

impl Scenario {
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Load `path` when given, otherwise the reference case.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
