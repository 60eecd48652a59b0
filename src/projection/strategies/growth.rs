//! Recurring-contribution accumulation (SIP, retirement) and the goal solve

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;
use log::debug;

/// Contribution schedule fed to the monthly accumulator
#[derive(Debug, Clone, Copy)]
struct ContributionPlan {
    initial: f64,
    monthly: f64,
    /// Annual contribution increase (%)
    step_up_rate: f64,
}

/// Month by month: interest accrues on the running balance, then that
/// month's contribution is added. The contribution steps up after each
/// 12-month row is recorded.
fn accumulate(ctx: &ProjectionContext, plan: ContributionPlan) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let growth = 1.0 + ctx.monthly_rate;
    let step_up = 1.0 + plan.step_up_rate / 100.0;

    let mut balance = plan.initial;
    let mut invested = plan.initial;
    let mut contribution = plan.monthly;

    for month in 1..=ctx.months() {
        balance = balance * growth + contribution;
        invested += contribution;

        if month % 12 == 0 {
            let year = month / 12;
            out.rows.push(YearData {
                invested,
                interest: balance - invested,
                total: balance,
                real_value: ctx.real_value(balance, year),
                ..YearData::new(year, ctx.label(year))
            });
            contribution *= step_up;
        }
    }

    out.total_invested = invested;
    out.final_value = balance;
    out
}

pub fn sip(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    accumulate(
        ctx,
        ContributionPlan {
            initial: inputs.initial_investment,
            monthly: inputs.monthly_contribution,
            step_up_rate: inputs.step_up_rate,
        },
    )
}

/// Level monthly contribution that grows `initial` to `target` over
/// `months` at `monthly_rate`:
///
/// `initial*(1+i)^n + pmt*((1+i)^n - 1)/i = target`
///
/// Zero when the lump sum alone already reaches the target. Growth is taken
/// in log space: a rate too small to move `1 + i` falls back to the
/// zero-rate split, and a growth factor beyond `f64` drives the payment to 0.
pub fn required_monthly_contribution(initial: f64, target: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = months as f64;
    let log_growth = n * monthly_rate.max(0.0).ln_1p();
    let lump_value = if initial == 0.0 { 0.0 } else { initial * log_growth.exp() };
    let remaining = target - lump_value;
    if !(remaining > 0.0) {
        return 0.0;
    }

    // (1+i)^n - 1
    let grown = log_growth.exp_m1();
    if monthly_rate > 0.0 && grown > 0.0 {
        remaining * monthly_rate / grown
    } else {
        remaining / n
    }
}

/// Solve the contribution, then build the schedule as a level SIP
pub fn goal(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let pmt = required_monthly_contribution(
        inputs.initial_investment,
        inputs.target_amount,
        ctx.monthly_rate,
        ctx.months(),
    );
    debug!("goal {} over {} months needs {:.2}/month", inputs.target_amount, ctx.months(), pmt);

    let mut out = accumulate(
        ctx,
        ContributionPlan {
            initial: inputs.initial_investment,
            monthly: pmt,
            step_up_rate: 0.0,
        },
    );
    out.monthly_payment = pmt;
    out
}
