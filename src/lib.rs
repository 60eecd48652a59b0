//! Finance Projector - deterministic projection engine for personal-finance scenarios
//!
//! This library provides:
//! - A pure `project(mode, inputs)` engine covering SIP, lump sum, compounding,
//!   loans, equity, rental property, ROI, flat-rate tax, goal and retirement modes
//! - Year-by-year schedules with inflation-adjusted values
//! - CSV/JSON export and display formatting
//! - Batch runs, rate sweeps and an advisory commentary step with fallback

pub mod advisory;
pub mod display;
pub mod export;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{Mode, ProjectionInputs};
pub use projection::{project, CalculationResult, YearData};
pub use scenario::ScenarioRunner;
