//! ev-properties: physical property lookups for evapflow.
//!
//! Provides:
//! - Saturation temperature and latent heat of water
//! - Solution specific heat, boiling point elevation, density
//! - PropertyModel trait for property lookups
//! - Correlation-based sucrose/water backend
//!
//! # Architecture
//!
//! This crate defines a stable API (`PropertyModel` trait) that isolates the
//! rest of evapflow from any particular property source. The built-in backend
//! (`SucroseModel`) evaluates published correlations directly, so the train
//! and crystallization solvers stay deterministic and dependency-free. The
//! trait leaves room for future additions:
//! - Tabulated steam-table backends
//! - Solute systems other than sucrose
//! - External property servers
//!
//! # Example
//!
//! ```
//! use ev_properties::{PropertyModel, SucroseModel};
//! use ev_core::units::bar;
//!
//! let model = SucroseModel::new();
//! let t_sat = model.saturation_temperature(bar(1.5)).unwrap();
//! let cp = model.solution_specific_heat(0.15).unwrap();
//! assert!(t_sat.value > 384.0 && t_sat.value < 385.0);
//! assert!(cp > 3900.0 && cp < 4000.0);
//! ```

pub mod error;
pub mod model;
pub mod sucrose;
pub mod water;

// Re-exports for ergonomics
pub use error::{PropertyError, PropertyResult};
pub use model::{EffectProperties, PropertyModel};
pub use sucrose::SucroseModel;
