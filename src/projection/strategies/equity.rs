//! Equity position held to a sale price, with dividends paid out linearly

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// Capital gain is spread evenly across the holding period and dividends
/// accrue at `dividendYield`% of cost basis per year without reinvestment.
/// A zero-year holding is treated as one year.
pub fn stock(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let years = ctx.duration_years.max(1);
    let cost_basis = inputs.quantity * inputs.buy_price;
    let capital_gain = (inputs.sell_price - inputs.buy_price) * inputs.quantity;
    let annual_dividend = cost_basis * inputs.dividend_yield / 100.0;

    let value_at = |year: u32| {
        let elapsed = year as f64;
        cost_basis + capital_gain * elapsed / years as f64 + annual_dividend * elapsed
    };

    for year in 1..=years {
        let total = value_at(year);
        out.rows.push(YearData {
            invested: cost_basis,
            interest: total - cost_basis,
            total,
            real_value: ctx.real_value(total, year),
            ..YearData::new(year, ctx.label(year))
        });
    }

    out.total_invested = cost_basis;
    out.final_value = value_at(years);
    out.duration_years = years;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Mode, ProjectionInputs};
    use approx::assert_relative_eq;

    fn run(inputs: ProjectionInputs) -> StrategyOutput {
        let resolved = inputs.resolve();
        let ctx = ProjectionContext::new(Mode::Stock, &resolved);
        stock(&ctx, &resolved)
    }

    #[test]
    fn test_gain_and_dividends() {
        let out = run(ProjectionInputs {
            buy_price: 100.0,
            sell_price: 150.0,
            quantity: 10.0,
            dividend_yield: 2.0,
            time_period_years: 5.0,
            ..Default::default()
        });
        assert_eq!(out.total_invested, 1_000.0);
        // 1000 + 500 gain + 5 * 20 dividends
        assert_relative_eq!(out.final_value, 1_600.0, max_relative = 1e-12);
        // Year 2: 1000 + 500 * 2/5 + 40
        assert_relative_eq!(out.rows[1].total, 1_240.0, max_relative = 1e-12);
        assert_eq!(out.rows.len(), 5);
    }

    #[test]
    fn test_zero_duration_is_one_year() {
        let out = run(ProjectionInputs {
            buy_price: 20.0,
            sell_price: 25.0,
            quantity: 4.0,
            ..Default::default()
        });
        assert_eq!(out.duration_years, 1);
        assert_eq!(out.rows.len(), 1);
        assert_relative_eq!(out.final_value, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_real_value_is_deflated() {
        let out = run(ProjectionInputs {
            buy_price: 100.0,
            sell_price: 100.0,
            quantity: 1.0,
            inflation_rate: 25.0,
            time_period_years: 1.0,
            ..Default::default()
        });
        assert_relative_eq!(out.rows[0].real_value, 80.0, max_relative = 1e-12);
    }
}
