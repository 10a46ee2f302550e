//! ev-core: stable foundation for evapflow.
//!
//! Contains:
//! - units (uom SI types + constructors + process constants)
//! - numeric (Real + tolerances + float helpers + grids)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EvError, EvResult};
pub use numeric::*;
pub use units::*;
