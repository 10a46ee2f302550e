//! ev-crystal: batch cooling crystallization.
//!
//! Provides:
//! - Solubility and supersaturation for the sucrose/water system
//! - Power-law nucleation and Arrhenius growth kinetics
//! - Linear and exponential cooling schedules with profile sampling
//! - Batch evaluation of kinetics along a cooling profile
//! - Crystallizer vessel sizing
//!
//! The kinetics are deliberately open loop: liquor concentration is a fixed
//! batch parameter and crystal growth does not deplete it. That keeps every
//! sample an independent algebraic evaluation, which is what the screening
//! workflow wants.

pub mod batch;
pub mod cooling;
pub mod error;
pub mod kinetics;
pub mod solubility;
pub mod vessel;

// Re-exports for ergonomics
pub use batch::{BatchKinetics, CrystallizationState, evaluate_batch};
pub use cooling::{CoolingProfile, CoolingSchedule, ProfileSample};
pub use error::{CrystalError, CrystalResult};
pub use kinetics::{
    SIZE_COEFFICIENT_OF_VARIATION_PCT, SUPERSATURATION_FLOOR, growth_rate, mean_crystal_size_m,
    nucleation_rate, population_density,
};
pub use solubility::{solubility, supersaturation};
pub use vessel::{
    AGITATION_POWER_W_PER_M3, VesselSizing, coil_surface_m2, residence_time_s, size_vessel,
};
