//! Parallel sensitivity driver.
//!
//! One variable, one axis, full chain per point: solve the train, rate the
//! surfaces, take the steam-side performance. Points are independent, so
//! they run on the rayon pool; results come back in axis order. The first
//! failing point aborts the sweep and names itself.

use crate::error::{AnalysisError, AnalysisResult};
use crate::sweep::SweepAxis;
use ev_core::units::{bar, celsius};
use ev_properties::PropertyModel;
use ev_train::{
    EqualSplit, FeedStream, PressureProfile, TrainResult, size_train, solve_train,
    train_performance,
};
use rayon::prelude::*;
use tracing::info;

/// The variable a sensitivity sweep perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    /// First-effect operating pressure [bar].
    FirstEffectPressureBar,
    /// Final concentration target [mass fraction].
    TargetConcentration,
    /// Feed mass flow [kg/h].
    FeedFlowKgPerHour,
    /// Feed temperature [°C].
    FeedTemperatureC,
}

impl SweepVariable {
    /// Axis label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::FirstEffectPressureBar => "first-effect pressure [bar]",
            SweepVariable::TargetConcentration => "target concentration [-]",
            SweepVariable::FeedFlowKgPerHour => "feed flow [kg/h]",
            SweepVariable::FeedTemperatureC => "feed temperature [degC]",
        }
    }
}

/// Base design point a sweep perturbs one variable of.
#[derive(Debug, Clone)]
pub struct SensitivityCase {
    pub feed: FeedStream,
    pub target_concentration: f64,
    pub pressures: PressureProfile,
    pub steam_temperature_c: f64,
    pub film_coefficients: Vec<f64>,
    pub fouling_resistance: f64,
}

impl SensitivityCase {
    /// Inputs with `variable` replaced by `value`; everything else is the
    /// base case.
    fn with_variable(
        &self,
        variable: SweepVariable,
        value: f64,
    ) -> TrainResult<(FeedStream, f64, PressureProfile)> {
        let mut feed = self.feed.clone();
        let mut target = self.target_concentration;
        let mut pressures = self.pressures.clone();

        match variable {
            SweepVariable::FirstEffectPressureBar => {
                pressures = self.pressures.with_first_pressure(bar(value))?;
            }
            SweepVariable::TargetConcentration => {
                target = value;
            }
            SweepVariable::FeedFlowKgPerHour => {
                feed = FeedStream::new(value, self.feed.concentration(), self.feed.temperature())?;
            }
            SweepVariable::FeedTemperatureC => {
                feed = FeedStream::new(
                    self.feed.mass_flow(),
                    self.feed.concentration(),
                    celsius(value),
                )?;
            }
        }
        Ok((feed, target, pressures))
    }

    fn evaluate(
        &self,
        model: &dyn PropertyModel,
        value: f64,
        variable: SweepVariable,
    ) -> TrainResult<SweepPoint> {
        let (feed, target, pressures) = self.with_variable(variable, value)?;
        let solution = solve_train(model, &feed, target, &pressures, &EqualSplit)?;
        let sizing = size_train(
            &solution,
            self.steam_temperature_c,
            &self.film_coefficients,
            self.fouling_resistance,
        )?;
        let performance = train_performance(&solution);

        Ok(SweepPoint {
            value,
            temperatures_c: solution.temperatures_c(),
            total_area_m2: sizing.total_area().value,
            steam_consumption_kg_h: performance.steam_consumption_kg_h,
            steam_economy: performance.steam_economy,
            pinched_effects: sizing.pinched_effects().len(),
        })
    }
}

/// Chain outputs at one axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// The perturbed variable's value at this point.
    pub value: f64,
    /// Effect boiling temperatures [°C].
    pub temperatures_c: Vec<f64>,
    /// Total exchange surface [m²].
    pub total_area_m2: f64,
    /// External steam demand [kg/h].
    pub steam_consumption_kg_h: f64,
    /// Steam economy.
    pub steam_economy: f64,
    /// Number of effects with a collapsed driving force.
    pub pinched_effects: usize,
}

/// Ordered sweep output.
#[derive(Debug, Clone)]
pub struct SensitivitySweep {
    pub variable: SweepVariable,
    pub points: Vec<SweepPoint>,
}

impl SensitivitySweep {
    /// Axis values in sweep order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Run the chain at every axis value, in parallel.
pub fn run_sensitivity(
    model: &dyn PropertyModel,
    case: &SensitivityCase,
    variable: SweepVariable,
    axis: &SweepAxis,
) -> AnalysisResult<SensitivitySweep> {
    let values = axis.values();
    info!(
        variable = variable.label(),
        points = values.len(),
        "running sensitivity sweep"
    );

    let points = values
        .par_iter()
        .enumerate()
        .map(|(point_index, &value)| {
            case.evaluate(model, value, variable)
                .map_err(|source| AnalysisError::PointFailed {
                    point_index,
                    value,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SensitivitySweep { variable, points })
}
