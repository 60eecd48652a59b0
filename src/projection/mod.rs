//! Projection engine: derived context, per-mode strategies and result assembly

mod context;
mod engine;
pub mod metrics;
mod schedule;
pub mod strategies;

pub use context::{ProjectionContext, MAX_DURATION_YEARS};
pub use engine::project;
pub use schedule::{CalculationResult, ResultSummary, YearData};
