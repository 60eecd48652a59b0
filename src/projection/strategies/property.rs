//! Rental property: appreciating value plus accumulated net rent

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// Value compounds annually at the appreciation rate; net rent is added up
/// but never reinvested.
pub fn rental(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let price = inputs.property_price;
    let appreciation = 1.0 + inputs.appreciation_rate / 100.0;
    let net_annual_rent = (inputs.rental_income - inputs.monthly_expenses) * 12.0;

    let value_at = |year: u32| price * appreciation.powi(year as i32) + net_annual_rent * year as f64;

    for year in 1..=ctx.duration_years {
        let total = value_at(year);
        out.rows.push(YearData {
            invested: price,
            interest: total - price,
            total,
            real_value: ctx.real_value(total, year),
            ..YearData::new(year, ctx.label(year))
        });
    }

    out.total_invested = price;
    out.final_value = value_at(ctx.duration_years);
    out
}
