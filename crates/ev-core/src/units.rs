// ev-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Mass as UomMass, MassDensity as UomMassDensity, Power as UomPower,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

// Quantities uom has no convenient unit for are carried as documented f64
// aliases, SI-adjacent process conventions.

/// Mass flow in kg/h (process convention for feed and effect streams).
pub type MassFlowKgPerHour = f64;
/// Solute mass fraction, 0..1.
pub type MassFraction = f64;
/// Specific heat capacity in J/(kg*K).
pub type SpecHeatCapacity = f64;
/// Specific latent heat in J/kg.
pub type SpecLatentHeat = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    /// Molar gas constant in J/(mol*K), as used by the growth-rate
    /// Arrhenius term.
    pub const R_GAS_J_PER_MOL_K: f64 = 8.314;

    /// Offset between Celsius and Kelvin scales.
    pub const CELSIUS_OFFSET_K: f64 = 273.15;

    /// Hour-based process flows (kg/h) to SI time conversion.
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = bar(1.5);
        let _t = celsius(85.0);
        let _q = watt(1.0e6);
        let _a = m2(20.0);
        let _v = m3(4.0);
        let _m = kg(5000.0);
        let _rho = kg_per_m3(1248.0);
    }

    #[test]
    fn bar_is_1e5_pascal() {
        use uom::si::pressure::pascal;
        let p = bar(1.5);
        assert!((p.get::<pascal>() - 150_000.0).abs() < 1e-9);
    }

    #[test]
    fn celsius_kelvin_offset() {
        use uom::si::thermodynamic_temperature::kelvin;
        let t = celsius(85.0);
        assert!((t.get::<kelvin>() - 358.15).abs() < 1e-9);
    }
}
