//! Flat effective-rate income tax. Not a bracket model.

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// Single row labelled with the start year. `invested` is gross income,
/// `interest` is the tax as a negative amount and `total` is net income.
pub fn flat_rate(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let income = inputs.annual_income;
    let taxable = (income - inputs.deductions).max(0.0);
    let tax = taxable * inputs.tax_rate / 100.0;
    let net = income - tax;

    out.rows.push(YearData {
        invested: income,
        interest: -tax,
        total: net,
        real_value: net,
        ..YearData::new(1, ctx.start_year)
    });

    out.total_invested = income;
    out.final_value = net;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Mode, ProjectionInputs};

    #[test]
    fn test_flat_tax() {
        let resolved = ProjectionInputs {
            annual_income: 60_000.0,
            deductions: 5_000.0,
            tax_rate: 15.0,
            time_period_years: 3.0,
            start_year: 2025,
            ..Default::default()
        }
        .resolve();
        let ctx = ProjectionContext::new(Mode::Tax, &resolved);
        let out = flat_rate(&ctx, &resolved);

        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].label, 2025);
        assert_eq!(out.rows[0].interest, -8_250.0);
        assert_eq!(out.final_value, 51_750.0);
        assert_eq!(out.total_invested, 60_000.0);
    }

    #[test]
    fn test_deductions_above_income() {
        let resolved = ProjectionInputs {
            annual_income: 10_000.0,
            deductions: 15_000.0,
            tax_rate: 30.0,
            ..Default::default()
        }
        .resolve();
        let ctx = ProjectionContext::new(Mode::Tax, &resolved);
        let out = flat_rate(&ctx, &resolved);
        assert_eq!(out.final_value, 10_000.0);
        assert_eq!(out.rows[0].interest, 0.0);
    }
}
