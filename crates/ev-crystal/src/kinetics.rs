//! Nucleation and growth kinetics.
//!
//! Power-law secondary nucleation and Arrhenius-activated growth. Both rate
//! laws floor the supersaturation before raising it to fractional powers,
//! so undersaturated liquor yields a vanishing but finite, non-negative
//! rate instead of a complex power.

use crate::error::{CrystalError, CrystalResult};
use ev_core::units::constants::{CELSIUS_OFFSET_K, R_GAS_J_PER_MOL_K};

/// Floor applied to supersaturation before the rate laws.
pub const SUPERSATURATION_FLOOR: f64 = 1e-5;

/// Nucleation rate coefficient [#/(m³·s)].
pub const NUCLEATION_RATE_COEFF: f64 = 1.5e10;

/// Supersaturation order of the nucleation law.
pub const NUCLEATION_ORDER: f64 = 2.5;

/// Magma concentration exponent of the nucleation law.
pub const NUCLEATION_MAGMA_EXPONENT: f64 = 0.5;

/// Growth rate coefficient [m/s].
pub const GROWTH_RATE_COEFF_M_PER_S: f64 = 2.8e-7;

/// Supersaturation order of the growth law.
pub const GROWTH_ORDER: f64 = 1.5;

/// Growth activation energy [J/mol].
pub const GROWTH_ACTIVATION_ENERGY_J_PER_MOL: f64 = 45_000.0;

/// Denominator floor when converting rates to population density [m/s].
pub const GROWTH_RATE_FLOOR_M_PER_S: f64 = 1e-12;

/// Nominal coefficient of variation of the product size distribution [%].
pub const SIZE_COEFFICIENT_OF_VARIATION_PCT: f64 = 35.0;

/// Secondary nucleation rate [#/(m³·s)]:
/// `B = 1.5e10 * S^2.5 * mT^0.5`.
pub fn nucleation_rate(
    supersaturation: f64,
    magma_concentration_kg_m3: f64,
) -> CrystalResult<f64> {
    if !supersaturation.is_finite() {
        return Err(CrystalError::InvalidInput {
            what: "supersaturation must be finite",
        });
    }
    if !magma_concentration_kg_m3.is_finite() || magma_concentration_kg_m3 < 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "magma concentration must be non-negative and finite",
        });
    }

    let s = supersaturation.max(SUPERSATURATION_FLOOR);
    Ok(NUCLEATION_RATE_COEFF
        * s.powf(NUCLEATION_ORDER)
        * magma_concentration_kg_m3.powf(NUCLEATION_MAGMA_EXPONENT))
}

/// Crystal growth rate [m/s]:
/// `G = 2.8e-7 * S^1.5 * exp(-Ea / (R * T))` with T in kelvin.
pub fn growth_rate(supersaturation: f64, t_c: f64) -> CrystalResult<f64> {
    if !supersaturation.is_finite() {
        return Err(CrystalError::InvalidInput {
            what: "supersaturation must be finite",
        });
    }
    if !t_c.is_finite() || t_c <= -CELSIUS_OFFSET_K {
        return Err(CrystalError::InvalidInput {
            what: "temperature must be finite and above absolute zero",
        });
    }

    let s = supersaturation.max(SUPERSATURATION_FLOOR);
    let t_k = t_c + CELSIUS_OFFSET_K;
    let arrhenius = (-GROWTH_ACTIVATION_ENERGY_J_PER_MOL / (R_GAS_J_PER_MOL_K * t_k)).exp();
    Ok(GROWTH_RATE_COEFF_M_PER_S * s.powf(GROWTH_ORDER) * arrhenius)
}

/// Mass-mean crystal size [m] after growing at `growth_rate_m_s` for
/// `batch_time_s`: `L50 = G * t / 2`.
pub fn mean_crystal_size_m(growth_rate_m_s: f64, batch_time_s: f64) -> f64 {
    growth_rate_m_s * batch_time_s / 2.0
}

/// Nuclei population density [#/m⁴]: `n0 = B * t / G`, with the growth
/// rate floored so a stalled batch reports a huge but finite density.
pub fn population_density(
    nucleation_rate: f64,
    growth_rate_m_s: f64,
    batch_time_s: f64,
) -> f64 {
    nucleation_rate * batch_time_s / growth_rate_m_s.max(GROWTH_RATE_FLOOR_M_PER_S)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nucleation_magnitude_when_supersaturated() {
        let b = nucleation_rate(0.0638, 50.0).unwrap();
        assert!(b > 1.05e8 && b < 1.12e8, "B = {b}");
    }

    #[test]
    fn growth_magnitude_when_supersaturated() {
        let g = growth_rate(0.0638, 35.0).unwrap();
        assert!(g > 1.00e-16 && g < 1.13e-16, "G = {g}");
    }

    #[test]
    fn floor_replaces_undersaturated_driving_force() {
        let floored = nucleation_rate(-0.5, 50.0).unwrap();
        let at_floor = nucleation_rate(SUPERSATURATION_FLOOR, 50.0).unwrap();
        assert_eq!(floored, at_floor);
        assert!(floored > 0.0);

        let g_floored = growth_rate(-0.25, 40.0).unwrap();
        let g_at_floor = growth_rate(SUPERSATURATION_FLOOR, 40.0).unwrap();
        assert_eq!(g_floored, g_at_floor);
    }

    #[test]
    fn growth_accelerates_with_temperature() {
        let cold = growth_rate(0.05, 20.0).unwrap();
        let warm = growth_rate(0.05, 80.0).unwrap();
        assert!(warm > cold);
    }

    #[test]
    fn zero_magma_kills_nucleation() {
        let b = nucleation_rate(0.1, 0.0).unwrap();
        assert_eq!(b, 0.0);
    }

    #[test]
    fn mean_size_is_half_growth_times_time() {
        assert!((mean_crystal_size_m(2.0e-8, 14_400.0) - 1.44e-4).abs() < 1e-12);
    }

    #[test]
    fn population_density_floors_the_growth_rate() {
        let stalled = population_density(2.0, 1.0e-13, 3600.0);
        assert!((stalled - 7.2e15).abs() / 7.2e15 < 1e-12);

        let active = population_density(1.0e8, 1.0e-6, 3600.0);
        assert!((active - 3.6e17).abs() / 3.6e17 < 1e-12);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(nucleation_rate(f64::NAN, 50.0).is_err());
        assert!(nucleation_rate(0.1, -1.0).is_err());
        assert!(growth_rate(0.1, f64::INFINITY).is_err());
        assert!(growth_rate(0.1, -280.0).is_err());
    }

    proptest! {
        #[test]
        fn rates_finite_and_non_negative(
            s in -1.0f64..2.0,
            magma in 0.0f64..500.0,
            t_c in 0.0f64..100.0,
        ) {
            let b = nucleation_rate(s, magma).unwrap();
            let g = growth_rate(s, t_c).unwrap();
            prop_assert!(b.is_finite() && b >= 0.0);
            prop_assert!(g.is_finite() && g > 0.0);
        }

        #[test]
        fn floor_never_raises_a_rate(
            s in -1.0f64..0.0,
            magma in 1.0f64..500.0,
        ) {
            // any undersaturated liquor behaves exactly like the floor
            let b = nucleation_rate(s, magma).unwrap();
            let at_floor = nucleation_rate(SUPERSATURATION_FLOOR, magma).unwrap();
            prop_assert_eq!(b, at_floor);
        }
    }
}
