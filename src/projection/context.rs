//! Derived quantities shared by every strategy within a single projection

use crate::inputs::{Mode, ResolvedInputs};

/// Longest horizon projected; larger periods are clamped
pub const MAX_DURATION_YEARS: u32 = 1_000;

/// Per-call derived state. Built once, read by the selected strategy and by
/// post-processing; never outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionContext {
    pub mode: Mode,

    /// Nominal rate net of expense ratio (%/yr), floored at 0
    pub effective_rate: f64,

    /// Effective rate as a monthly decimal
    pub monthly_rate: f64,

    /// Whole years projected
    pub duration_years: u32,

    /// Annual inflation as a decimal
    pub inflation: f64,

    /// Calendar year row labels are offset from
    pub start_year: i32,
}

impl ProjectionContext {
    pub fn new(mode: Mode, inputs: &ResolvedInputs) -> Self {
        let effective_rate = (inputs.interest_rate - inputs.expense_ratio).max(0.0);

        Self {
            mode,
            effective_rate,
            monthly_rate: effective_rate / 100.0 / 12.0,
            duration_years: effective_duration(mode, inputs),
            inflation: inputs.inflation_rate / 100.0,
            start_year: inputs.start_year,
        }
    }

    /// Total months projected
    pub fn months(&self) -> u32 {
        self.duration_years * 12
    }

    /// Deflate a nominal amount observed at the end of `year`
    pub fn real_value(&self, nominal: f64, year: u32) -> f64 {
        let deflator = (1.0 + self.inflation).powi(year as i32);
        if deflator > 0.0 && deflator.is_finite() {
            nominal / deflator
        } else {
            nominal
        }
    }

    /// Calendar label for a relative year, pinned at `i32::MAX`
    pub fn label(&self, year: u32) -> i32 {
        self.start_year.saturating_add(year as i32)
    }
}

/// Whole-year duration for the mode. Retirement derives it from the ages
/// when both are supplied.
fn effective_duration(mode: Mode, inputs: &ResolvedInputs) -> u32 {
    if mode == Mode::Retirement {
        if let (Some(current), Some(retire)) = (inputs.current_age, inputs.retirement_age) {
            return whole_years(retire - current).max(1);
        }
    }
    whole_years(inputs.time_period_years)
}

fn whole_years(years: f64) -> u32 {
    if years.is_finite() && years > 0.0 {
        years.round().min(MAX_DURATION_YEARS as f64) as u32
    } else {
        0
    }
}
