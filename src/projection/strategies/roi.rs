//! Simple before/after valuation

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// Invested is `initialInvestment`, final value is `sellPrice`; the schedule
/// moves linearly from one to the other.
pub fn simple(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let invested = inputs.initial_investment;
    let final_value = inputs.sell_price;
    let profit = final_value - invested;
    let years = ctx.duration_years;

    for year in 1..=years {
        let total = invested + profit * year as f64 / years as f64;
        out.rows.push(YearData {
            invested,
            interest: total - invested,
            total,
            real_value: ctx.real_value(total, year),
            ..YearData::new(year, ctx.label(year))
        });
    }

    out.total_invested = invested;
    out.final_value = final_value;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Mode, ProjectionInputs};

    #[test]
    fn test_linear_path_to_sale_price() {
        let resolved = ProjectionInputs {
            initial_investment: 1_000.0,
            sell_price: 1_500.0,
            time_period_years: 4.0,
            ..Default::default()
        }
        .resolve();
        let ctx = ProjectionContext::new(Mode::Roi, &resolved);
        let out = simple(&ctx, &resolved);

        let totals: Vec<f64> = out.rows.iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![1_125.0, 1_250.0, 1_375.0, 1_500.0]);
        assert_eq!(out.final_value, 1_500.0);
    }

    #[test]
    fn test_zero_years_has_no_rows() {
        let resolved = ProjectionInputs {
            initial_investment: 1_000.0,
            sell_price: 900.0,
            ..Default::default()
        }
        .resolve();
        let ctx = ProjectionContext::new(Mode::Roi, &resolved);
        let out = simple(&ctx, &resolved);
        assert!(out.rows.is_empty());
        assert_eq!(out.final_value, 900.0);
    }
}
