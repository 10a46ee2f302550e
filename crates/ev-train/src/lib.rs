//! ev-train: forward-feed multiple-effect evaporation.
//!
//! Provides:
//! - Validated feed and pressure-profile inputs
//! - Pluggable vapor allocation policies
//! - The forward-feed train solver (closed-form recurrence, no iteration)
//! - Heat-transfer surface sizing with fouling
//! - Steam consumption, steam economy, and the effect-count study
//!
//! # Architecture
//!
//! The solver walks the effects once in flow order: the overall solute
//! balance fixes the final liquor rate, an allocation policy distributes the
//! total vapor duty, and the per-effect recurrence then yields flows,
//! concentrations, temperatures, and heat duties in a single pass. Sizing
//! and performance are deliberately separate passes over the solved train,
//! so design studies can re-rate surfaces without re-solving.

pub mod allocation;
pub mod error;
pub mod feed;
pub mod performance;
pub mod sizing;
pub mod solver;

// Re-exports for ergonomics
pub use allocation::{EqualSplit, VaporSplit, WeightedSplit};
pub use error::{TrainError, TrainResult};
pub use feed::{FeedStream, PressureProfile};
pub use performance::{
    EffectCountPoint, HEATING_STEAM_LATENT_HEAT_J_PER_KG, TrainPerformance, effect_count_study,
    train_performance,
};
pub use sizing::{
    DEFAULT_FOULING_RESISTANCE_M2K_PER_W, HEATING_STEAM_TEMPERATURE_C,
    REFERENCE_FILM_COEFFICIENTS_W_PER_M2K, TrainSizing, driving_forces, effective_coefficient,
    exchange_area, size_train,
};
pub use solver::{EffectState, TrainSolution, solve_train};
