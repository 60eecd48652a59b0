//! Projection entry point: mode dispatch plus shared post-processing

use super::context::ProjectionContext;
use super::metrics::{self, round_money};
use super::schedule::{CalculationResult, YearData};
use super::strategies::{self, StrategyOutput};
use crate::inputs::{Mode, ProjectionInputs};
use log::debug;

/// Project a scenario. Total over its inputs: missing or non-finite numbers
/// are treated as zero and every ratio comes back finite.
pub fn project(mode: Mode, inputs: &ProjectionInputs) -> CalculationResult {
    let resolved = inputs.resolve();
    let ctx = ProjectionContext::new(mode, &resolved);
    debug!(
        "projecting {} over {} years at effective {:.4}%",
        mode, ctx.duration_years, ctx.effective_rate
    );

    let output = strategies::run(&ctx, &resolved);
    finalize(&ctx, resolved.tax_rate, output)
}

/// Rounding, tax on gain, CAGR, doubling time and purchasing power loss
fn finalize(ctx: &ProjectionContext, tax_rate: f64, output: StrategyOutput) -> CalculationResult {
    let total_invested = round_money(output.total_invested);
    let final_value = round_money(output.final_value);
    let yearly_data: Vec<YearData> = output.rows.into_iter().map(YearData::rounded).collect();

    let tax_payable = match ctx.mode {
        Mode::Loan => 0.0,
        Mode::Tax => total_invested - final_value,
        _ => round_money(metrics::tax_on_gain(total_invested, final_value, tax_rate)),
    };
    let post_tax_value = if ctx.mode == Mode::Tax {
        final_value
    } else {
        final_value - tax_payable
    };

    let purchasing_power_loss = yearly_data
        .last()
        .map(|row| final_value - row.real_value)
        .unwrap_or(0.0);

    CalculationResult {
        mode: ctx.mode,
        total_invested,
        final_value,
        total_interest: final_value - total_invested,
        tax_payable,
        post_tax_value,
        yearly_data,
        monthly_payment: round_money(output.monthly_payment),
        roi_percentage: metrics::roi_percentage(total_invested, final_value),
        cagr: metrics::cagr(total_invested, final_value, output.duration_years),
        duration_years: output.duration_years,
        doubling_time: metrics::doubling_time(ctx.effective_rate),
        purchasing_power_loss,
    }
}
