//! Closed-form compounding of a single deposit

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// `P * (1 + r/n)^(n*t)` with one row per whole year
fn grow(ctx: &ProjectionContext, principal: f64, periods_per_year: u32) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let n = periods_per_year.max(1) as f64;
    let per_period = 1.0 + ctx.effective_rate / 100.0 / n;
    let value_at = |years: u32| principal * per_period.powf(n * years as f64);

    for year in 1..=ctx.duration_years {
        let total = value_at(year);
        out.rows.push(YearData {
            invested: principal,
            interest: total - principal,
            total,
            real_value: ctx.real_value(total, year),
            ..YearData::new(year, ctx.label(year))
        });
    }

    out.total_invested = principal;
    out.final_value = value_at(ctx.duration_years);
    out
}

/// Annual compounding
pub fn lumpsum(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    grow(ctx, inputs.initial_investment, 1)
}

/// User-selected compounding frequency; unset means annual
pub fn compound(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    grow(ctx, inputs.initial_investment, inputs.compounding_frequency)
}
