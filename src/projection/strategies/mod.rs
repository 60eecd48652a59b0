//! One pure function per mode. Each returns raw (unrounded) figures and
//! schedule rows; rounding and shared ratios happen in the engine.

mod compound;
mod equity;
mod growth;
mod loan;
mod property;
mod roi;
mod tax;

pub use growth::required_monthly_contribution;

use super::context::ProjectionContext;
use super::schedule::YearData;
use crate::inputs::{Mode, ResolvedInputs};

/// What a strategy hands to post-processing
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutput {
    pub total_invested: f64,
    pub final_value: f64,
    pub rows: Vec<YearData>,
    /// Loan EMI or goal contribution
    pub monthly_payment: f64,
    /// Duration the figures cover; may differ from the context (stock)
    pub duration_years: u32,
}

impl StrategyOutput {
    fn new(ctx: &ProjectionContext) -> Self {
        Self {
            total_invested: 0.0,
            final_value: 0.0,
            rows: Vec::with_capacity(ctx.duration_years as usize),
            monthly_payment: 0.0,
            duration_years: ctx.duration_years,
        }
    }
}

type Strategy = fn(&ProjectionContext, &ResolvedInputs) -> StrategyOutput;

/// Select the strategy function for a mode
pub fn strategy_for(mode: Mode) -> Strategy {
    match mode {
        Mode::Sip | Mode::Retirement => growth::sip,
        Mode::Goal => growth::goal,
        Mode::Lumpsum => compound::lumpsum,
        Mode::Compound => compound::compound,
        Mode::Loan => loan::amortize,
        Mode::Stock => equity::stock,
        Mode::Property => property::rental,
        Mode::Roi => roi::simple,
        Mode::Tax => tax::flat_rate,
    }
}

/// Run the strategy selected by the context's mode
pub fn run(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    strategy_for(ctx.mode)(ctx, inputs)
}
