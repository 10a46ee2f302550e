//! Property model trait and validation helpers.

use crate::error::{PropertyError, PropertyResult};
use ev_core::units::constants::CELSIUS_OFFSET_K;
use ev_core::units::{Density, MassFraction, Pressure, SpecHeatCapacity, SpecLatentHeat, Temperature};

/// Properties an evaporation effect needs at one (pressure, concentration)
/// point.
///
/// The train solver queries four correlations per effect; batching them into
/// one call keeps the solver loop free of repeated validation and gives
/// backends the chance to share intermediate work (the saturation temperature
/// feeds both the effect temperature and, for table-based backends, the
/// latent heat).
#[derive(Clone, Copy, Debug)]
pub struct EffectProperties {
    /// Saturation temperature of water at the effect pressure [K]
    pub saturation_temperature: Temperature,

    /// Latent heat of vaporization at the effect pressure [J/kg]
    pub latent_heat: SpecLatentHeat,

    /// Specific heat of the liquor at the effect concentration [J/(kg·K)]
    pub specific_heat: SpecHeatCapacity,

    /// Boiling point elevation at the effect concentration [K]
    pub boiling_point_elevation: f64,
}

/// Trait for property lookup backends.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel
/// sweep evaluation. All methods validate inputs; callers propagate the
/// errors unmodified, so an out-of-range pressure surfaces at the top of the
/// solve with its original context.
pub trait PropertyModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation temperature of water at pressure `p`.
    fn saturation_temperature(&self, p: Pressure) -> PropertyResult<Temperature>;

    /// Latent heat of vaporization of water at pressure `p` [J/kg].
    fn latent_heat(&self, p: Pressure) -> PropertyResult<SpecLatentHeat>;

    /// Specific heat of the solution at solute mass fraction `x` [J/(kg·K)].
    fn solution_specific_heat(&self, x: MassFraction) -> PropertyResult<SpecHeatCapacity>;

    /// Boiling point elevation [K] at a solute concentration given in
    /// percent (0..100).
    fn boiling_point_elevation(&self, concentration_pct: f64) -> PropertyResult<f64>;

    /// Solution density [kg/m³] at mass fraction `x` and temperature
    /// `t_c` in °C.
    fn solution_density(&self, x: MassFraction, t_c: f64) -> PropertyResult<Density>;

    /// Batched per-effect lookup at one (pressure, concentration) point.
    ///
    /// The default implementation composes the four scalar lookups; backends
    /// with shared intermediates may override it.
    fn effect_properties(&self, p: Pressure, x: MassFraction) -> PropertyResult<EffectProperties> {
        Ok(EffectProperties {
            saturation_temperature: self.saturation_temperature(p)?,
            latent_heat: self.latent_heat(p)?,
            specific_heat: self.solution_specific_heat(x)?,
            boiling_point_elevation: self.boiling_point_elevation(100.0 * x)?,
        })
    }
}

pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> PropertyResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure a solute mass fraction is finite and in [0, 1).
    pub fn validate_mass_fraction(x: MassFraction) -> PropertyResult<()> {
        if !x.is_finite() || !(0.0..1.0).contains(&x) {
            return Err(PropertyError::InvalidArg {
                what: "mass fraction must be finite and in [0, 1)",
            });
        }
        Ok(())
    }

    /// Ensure a concentration in percent is finite and non-negative.
    pub fn validate_concentration_pct(pct: f64) -> PropertyResult<()> {
        if !pct.is_finite() || pct < 0.0 {
            return Err(PropertyError::InvalidArg {
                what: "concentration percent must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Ensure a Celsius temperature is finite and above absolute zero.
    pub fn validate_temperature_c(t_c: f64) -> PropertyResult<()> {
        if !t_c.is_finite() || t_c <= -CELSIUS_OFFSET_K {
            return Err(PropertyError::NonPhysical {
                what: "temperature must be finite and above absolute zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use ev_core::units::{bar, pa};

    #[test]
    fn pressure_validation() {
        assert!(validate_pressure(bar(1.5)).is_ok());
        assert!(validate_pressure(pa(0.0)).is_err());
        assert!(validate_pressure(pa(-100.0)).is_err());
        assert!(validate_pressure(pa(f64::NAN)).is_err());
    }

    #[test]
    fn mass_fraction_validation() {
        assert!(validate_mass_fraction(0.0).is_ok());
        assert!(validate_mass_fraction(0.65).is_ok());
        assert!(validate_mass_fraction(1.0).is_err());
        assert!(validate_mass_fraction(-0.1).is_err());
        assert!(validate_mass_fraction(f64::INFINITY).is_err());
    }

    #[test]
    fn temperature_validation() {
        assert!(validate_temperature_c(60.0).is_ok());
        assert!(validate_temperature_c(-20.0).is_ok());
        assert!(validate_temperature_c(-280.0).is_err());
        assert!(validate_temperature_c(f64::NAN).is_err());
    }
}
