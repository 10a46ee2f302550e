//! Crystallizer vessel sizing.

use crate::error::{CrystalError, CrystalResult};
use ev_core::units::{Mass, MassFraction, Power, Volume, m3, watt};
use ev_properties::PropertyModel;
use uom::si::mass::kilogram;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::power::watt as watt_unit;
use uom::si::volume::cubic_meter;

/// Specific agitation power for a stirred crystallizer [W/m³].
pub const AGITATION_POWER_W_PER_M3: f64 = 5.0;

/// Working volume and agitator duty for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselSizing {
    pub volume: Volume,
    pub agitation_power: Power,
}

impl VesselSizing {
    pub fn volume_m3(&self) -> f64 {
        self.volume.get::<cubic_meter>()
    }

    pub fn agitation_power_w(&self) -> f64 {
        self.agitation_power.get::<watt_unit>()
    }
}

/// Size the vessel for a batch of `batch_mass` liquor at the given
/// concentration and temperature. Density comes from the property model,
/// so lookups fail the same way the train does.
pub fn size_vessel(
    model: &dyn PropertyModel,
    batch_mass: Mass,
    concentration: MassFraction,
    temperature_c: f64,
) -> CrystalResult<VesselSizing> {
    let mass_kg = batch_mass.get::<kilogram>();
    if !mass_kg.is_finite() || mass_kg <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "batch mass must be positive and finite",
        });
    }

    let rho = model
        .solution_density(concentration, temperature_c)?
        .get::<kilogram_per_cubic_meter>();
    let volume_m3 = mass_kg / rho;

    Ok(VesselSizing {
        volume: m3(volume_m3),
        agitation_power: watt(AGITATION_POWER_W_PER_M3 * volume_m3),
    })
}

/// Cooling coil surface [m²]: `A = Q / (U * dT)`.
///
/// The coil must have a real driving force: `dT <= 0` is an error here,
/// not a zero clamp.
pub fn coil_surface_m2(duty_w: f64, u_w_per_m2k: f64, delta_t_k: f64) -> CrystalResult<f64> {
    if !duty_w.is_finite() || duty_w < 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "coil duty must be non-negative and finite",
        });
    }
    if !u_w_per_m2k.is_finite() || u_w_per_m2k <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "coil coefficient must be positive and finite",
        });
    }
    if !delta_t_k.is_finite() || delta_t_k <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "coil driving force must be positive and finite",
        });
    }
    Ok(duty_w / (u_w_per_m2k * delta_t_k))
}

/// Mean residence time [s] for a continuous draw: `tau = V / Qv`.
pub fn residence_time_s(volume_m3: f64, volumetric_flow_m3_per_s: f64) -> CrystalResult<f64> {
    if !volume_m3.is_finite() || volume_m3 <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "vessel volume must be positive and finite",
        });
    }
    if !volumetric_flow_m3_per_s.is_finite() || volumetric_flow_m3_per_s <= 0.0 {
        return Err(CrystalError::InvalidInput {
            what: "volumetric flow must be positive and finite",
        });
    }
    Ok(volume_m3 / volumetric_flow_m3_per_s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::units::kg;
    use ev_properties::SucroseModel;

    #[test]
    fn reference_batch_vessel() {
        let model = SucroseModel::new();
        // 5000 kg of 65 % liquor at 60 degC: rho = 1248 kg/m3
        let sizing = size_vessel(&model, kg(5000.0), 0.65, 60.0).unwrap();
        assert!((sizing.volume_m3() - 4.006_41).abs() < 1e-4);
        assert!((sizing.agitation_power_w() - 20.032).abs() < 1e-2);
    }

    #[test]
    fn vessel_rejects_bad_mass_and_bad_lookups() {
        let model = SucroseModel::new();
        assert!(size_vessel(&model, kg(0.0), 0.65, 60.0).is_err());
        assert!(size_vessel(&model, kg(-10.0), 0.65, 60.0).is_err());
        // out-of-domain mass fraction surfaces as a property error
        assert!(matches!(
            size_vessel(&model, kg(5000.0), 1.2, 60.0),
            Err(CrystalError::Property(_))
        ));
    }

    #[test]
    fn coil_surface_basic() {
        assert!((coil_surface_m2(1.0e5, 500.0, 20.0).unwrap() - 10.0).abs() < 1e-12);
        assert!(coil_surface_m2(1.0e5, 500.0, 0.0).is_err());
        assert!(coil_surface_m2(1.0e5, 0.0, 20.0).is_err());
        assert!(coil_surface_m2(-1.0, 500.0, 20.0).is_err());
    }

    #[test]
    fn residence_time_basic() {
        assert!((residence_time_s(4.0, 0.002).unwrap() - 2000.0).abs() < 1e-12);
        assert!(residence_time_s(4.0, 0.0).is_err());
        assert!(residence_time_s(-4.0, 0.002).is_err());
    }
}
