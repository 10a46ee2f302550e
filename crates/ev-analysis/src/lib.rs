//! ev-analysis: design studies over the evaporation train.
//!
//! Provides:
//! - Linear sweep axes with exact endpoints
//! - A parallel sensitivity driver over the solve/size/rate chain
//! - Installed-cost curves, capital and operating cost, payback
//! - The feed-flow cost optimization
//!
//! Every sweep point is an independent closed-form solve, so the driver
//! fans points out with rayon and reassembles them in axis order.

pub mod economics;
pub mod error;
pub mod sensitivity;
pub mod sweep;

// Re-exports for ergonomics
pub use economics::{
    FeedCostPoint, FeedFlowStudy, annual_operating_cost_eur, crystallizer_cost_eur,
    evaporator_cost_eur, exchanger_cost_eur, optimize_feed_flow, roi_years,
    total_capital_investment_eur,
};
pub use error::{AnalysisError, AnalysisResult};
pub use sensitivity::{
    SensitivityCase, SensitivitySweep, SweepPoint, SweepVariable, run_sensitivity,
};
pub use sweep::SweepAxis;
