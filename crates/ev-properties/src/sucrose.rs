//! Correlation backend for sucrose/water solutions.

use crate::error::PropertyResult;
use crate::model::{PropertyModel, validation};
use crate::water;
use ev_core::units::{
    Density, MassFraction, Pressure, SpecHeatCapacity, SpecLatentHeat, Temperature, k, kg_per_m3,
};

/// Specific heat of pure water [J/(kg·K)] in the solution correlation.
const CP_WATER_J_PER_KG_K: f64 = 4180.0;

/// Fractional cp reduction per unit solute mass fraction.
const CP_SOLUTE_FACTOR: f64 = 0.3;

/// Boiling point elevation per percent solute [K/%].
const BPE_K_PER_PCT: f64 = 0.5;

/// Density correlation coefficients: rho = 1000 + 400*x - 0.3*(T - 20).
const DENSITY_WATER_KG_M3: f64 = 1000.0;
const DENSITY_SOLUTE_COEFF: f64 = 400.0;
const DENSITY_TEMP_COEFF: f64 = 0.3;
const DENSITY_REF_TEMP_C: f64 = 20.0;

/// Property backend for sucrose/water process liquors.
///
/// Water-side lookups delegate to the IF97/Watson correlations in
/// [`water`]; solution-side lookups are linear industrial correlations in
/// solute mass fraction. Stateless, so a single instance can serve parallel
/// sweeps.
#[derive(Clone, Copy, Debug, Default)]
pub struct SucroseModel;

impl SucroseModel {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyModel for SucroseModel {
    fn name(&self) -> &str {
        "sucrose-water correlations"
    }

    fn saturation_temperature(&self, p: Pressure) -> PropertyResult<Temperature> {
        validation::validate_pressure(p)?;
        let t_k = water::saturation_temperature_k(p.value)?;
        Ok(k(t_k))
    }

    fn latent_heat(&self, p: Pressure) -> PropertyResult<SpecLatentHeat> {
        validation::validate_pressure(p)?;
        water::latent_heat_j_per_kg(p.value)
    }

    fn solution_specific_heat(&self, x: MassFraction) -> PropertyResult<SpecHeatCapacity> {
        validation::validate_mass_fraction(x)?;
        Ok(CP_WATER_J_PER_KG_K * (1.0 - CP_SOLUTE_FACTOR * x))
    }

    fn boiling_point_elevation(&self, concentration_pct: f64) -> PropertyResult<f64> {
        validation::validate_concentration_pct(concentration_pct)?;
        Ok(BPE_K_PER_PCT * concentration_pct)
    }

    fn solution_density(&self, x: MassFraction, t_c: f64) -> PropertyResult<Density> {
        validation::validate_mass_fraction(x)?;
        validation::validate_temperature_c(t_c)?;
        let rho = DENSITY_WATER_KG_M3 + DENSITY_SOLUTE_COEFF * x
            - DENSITY_TEMP_COEFF * (t_c - DENSITY_REF_TEMP_C);
        Ok(kg_per_m3(rho))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropertyError;
    use ev_core::units::bar;
    use proptest::prelude::*;
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn saturation_temperature_first_effect() {
        let model = SucroseModel::new();
        let t = model.saturation_temperature(bar(1.5)).unwrap();
        let t_c = t.get::<degree_celsius>();
        assert!(t_c > 111.0 && t_c < 112.0, "got {t_c}");
    }

    #[test]
    fn specific_heat_of_feed_liquor() {
        let model = SucroseModel::new();
        let cp = model.solution_specific_heat(0.15).unwrap();
        assert!((cp - 3991.9).abs() < 0.1);

        // pure water limit
        let cp0 = model.solution_specific_heat(0.0).unwrap();
        assert!((cp0 - 4180.0).abs() < 1e-9);
    }

    #[test]
    fn boiling_point_elevation_scales_with_percent() {
        let model = SucroseModel::new();
        assert!((model.boiling_point_elevation(65.0).unwrap() - 32.5).abs() < 1e-9);
        assert!((model.boiling_point_elevation(0.0).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn density_of_concentrated_liquor() {
        let model = SucroseModel::new();
        let rho = model.solution_density(0.65, 60.0).unwrap();
        assert!((rho.get::<kilogram_per_cubic_meter>() - 1248.0).abs() < 1e-9);
    }

    #[test]
    fn effect_properties_batches_all_four() {
        let model = SucroseModel::new();
        let props = model.effect_properties(bar(0.15), 0.65).unwrap();
        assert!(props.latent_heat > 2.3e6);
        assert!((props.boiling_point_elevation - 32.5).abs() < 1e-9);
        assert!((props.specific_heat - 4180.0 * 0.805).abs() < 0.1);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let model = SucroseModel::new();
        assert!(matches!(
            model.saturation_temperature(bar(-1.0)),
            Err(PropertyError::NonPhysical { .. })
        ));
        assert!(matches!(
            model.solution_specific_heat(1.2),
            Err(PropertyError::InvalidArg { .. })
        ));
        assert!(model.boiling_point_elevation(f64::NAN).is_err());
        assert!(model.solution_density(0.5, -300.0).is_err());
    }

    proptest! {
        #[test]
        fn density_positive_over_service_range(
            x in 0.0f64..0.8,
            t_c in 0.0f64..120.0,
        ) {
            let model = SucroseModel::new();
            let rho = model.solution_density(x, t_c).unwrap();
            prop_assert!(rho.get::<kilogram_per_cubic_meter>() > 900.0);
        }

        #[test]
        fn specific_heat_decreases_with_concentration(
            x in 0.0f64..0.9,
            dx in 0.01f64..0.09,
        ) {
            let model = SucroseModel::new();
            let lo = model.solution_specific_heat(x).unwrap();
            let hi_x = (x + dx).min(0.99);
            let hi = model.solution_specific_heat(hi_x).unwrap();
            prop_assert!(hi < lo);
        }
    }
}
