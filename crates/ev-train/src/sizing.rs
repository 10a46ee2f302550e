//! Heat-transfer surface sizing.
//!
//! Pure rating pass over a solved train: fouled overall coefficients,
//! log-free driving forces (condensing steam against boiling liquor), and
//! the resulting exchange areas. Deliberately decoupled from the solver so
//! surfaces can be re-rated without re-solving flows.

use crate::error::{TrainError, TrainResult};
use crate::solver::TrainSolution;
use ev_core::units::{Area, m2};
use uom::si::area::square_meter;

/// Default fouling resistance [m²·K/W].
pub const DEFAULT_FOULING_RESISTANCE_M2K_PER_W: f64 = 2.0e-4;

/// Heating steam temperature on the first effect [°C].
pub const HEATING_STEAM_TEMPERATURE_C: f64 = 120.0;

/// Film coefficients for a three-effect reference train [W/(m²·K)].
pub const REFERENCE_FILM_COEFFICIENTS_W_PER_M2K: [f64; 3] = [2500.0, 2200.0, 1800.0];

/// Fouled overall coefficient: `1 / (1/U + Rf)` [W/(m²·K)].
pub fn effective_coefficient(u: f64, fouling: f64) -> TrainResult<f64> {
    if !u.is_finite() || u <= 0.0 {
        return Err(TrainError::InvalidInput {
            what: "film coefficient must be positive and finite",
        });
    }
    if !fouling.is_finite() || fouling < 0.0 {
        return Err(TrainError::InvalidInput {
            what: "fouling resistance must be non-negative and finite",
        });
    }
    Ok(1.0 / (1.0 / u + fouling))
}

/// Exchange area `|Q| / (U_eff * dT)` [m²].
///
/// A non-positive driving force gives area 0: the zero is the caller's
/// infeasibility signal for that effect, not an error.
pub fn exchange_area(duty_w: f64, u: f64, delta_t_k: f64, fouling: f64) -> TrainResult<f64> {
    if !duty_w.is_finite() {
        return Err(TrainError::InvalidInput {
            what: "heat duty must be finite",
        });
    }
    if !delta_t_k.is_finite() {
        return Err(TrainError::InvalidInput {
            what: "temperature driving force must be finite",
        });
    }
    let u_eff = effective_coefficient(u, fouling)?;
    if delta_t_k <= 0.0 {
        return Ok(0.0);
    }
    Ok(duty_w.abs() / (u_eff * delta_t_k))
}

/// Driving forces along a train [K]: steam against the first effect, then
/// each effect's vapor against the next body.
pub fn driving_forces(steam_temperature_c: f64, effect_temperatures_c: &[f64]) -> Vec<f64> {
    let mut dt = Vec::with_capacity(effect_temperatures_c.len());
    let mut hot = steam_temperature_c;
    for &t in effect_temperatures_c {
        dt.push(hot - t);
        hot = t;
    }
    dt
}

/// Sized surfaces for a train.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSizing {
    /// Exchange area per effect.
    pub areas: Vec<Area>,
    /// Driving force per effect [K].
    pub driving_forces_k: Vec<f64>,
    /// Effects whose driving force collapsed (area clamped to zero).
    pinched: Vec<usize>,
}

impl TrainSizing {
    /// Sum of all effect areas.
    pub fn total_area(&self) -> Area {
        let sum = self
            .areas
            .iter()
            .map(|a| a.get::<square_meter>())
            .sum::<f64>();
        m2(sum)
    }

    /// Indices of effects with a non-positive driving force.
    pub fn pinched_effects(&self) -> &[usize] {
        &self.pinched
    }

    /// True when every effect has a usable driving force.
    pub fn is_feasible(&self) -> bool {
        self.pinched.is_empty()
    }

    /// Areas in m², convenience for reporting.
    pub fn areas_m2(&self) -> Vec<f64> {
        self.areas.iter().map(|a| a.get::<square_meter>()).collect()
    }
}

/// Rate every effect of a solved train.
///
/// `film_coefficients` must carry one U per effect.
pub fn size_train(
    solution: &TrainSolution,
    steam_temperature_c: f64,
    film_coefficients: &[f64],
    fouling: f64,
) -> TrainResult<TrainSizing> {
    if !steam_temperature_c.is_finite() {
        return Err(TrainError::InvalidInput {
            what: "steam temperature must be finite",
        });
    }
    if film_coefficients.len() != solution.effects.len() {
        return Err(TrainError::InvalidInput {
            what: "one film coefficient required per effect",
        });
    }

    let dt = driving_forces(steam_temperature_c, &solution.temperatures_c());
    let mut areas = Vec::with_capacity(dt.len());
    let mut pinched = Vec::new();
    for (i, effect) in solution.effects.iter().enumerate() {
        let area = exchange_area(effect.heat_duty_w(), film_coefficients[i], dt[i], fouling)?;
        if dt[i] <= 0.0 {
            pinched.push(i);
        }
        areas.push(m2(area));
    }

    Ok(TrainSizing {
        areas,
        driving_forces_k: dt,
        pinched,
    })
}
