//! Amortizing loan with a level monthly installment

use super::StrategyOutput;
use crate::inputs::ResolvedInputs;
use crate::projection::context::ProjectionContext;
use crate::projection::schedule::YearData;

/// Level installment for `principal` over `months` at monthly rate `r`:
/// `P*r / (1 - (1+r)^-N)`, evaluated in log space so that rates too small to
/// move `1 + r` still amortize and very large rates tend to `P*r`.
pub fn emi(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = months as f64;
    if monthly_rate <= 0.0 {
        return principal / n;
    }
    // 1 - (1+r)^-N
    let discounted = -(-n * monthly_rate.ln_1p()).exp_m1();
    if discounted > 0.0 {
        principal * monthly_rate / discounted
    } else {
        principal / n
    }
}

/// Balance still owed with `months_left` installments to go: their present
/// value, `EMI * (1 - (1+r)^-k) / r`. Stable at any rate, unlike rolling the
/// balance forward month by month, and exactly zero once nothing is left.
fn outstanding_balance(installment: f64, monthly_rate: f64, months_left: u32) -> f64 {
    let k = months_left as f64;
    if monthly_rate <= 0.0 {
        return installment * k;
    }
    installment * -(-k * monthly_rate.ln_1p()).exp_m1() / monthly_rate
}

/// Loans use the nominal rate, not the expense-adjusted one.
///
/// `invested` tracks principal repaid, `interest` cumulative interest paid and
/// `total` the outstanding balance. Real value is not meaningful for a
/// balance owed and is left at zero.
pub fn amortize(ctx: &ProjectionContext, inputs: &ResolvedInputs) -> StrategyOutput {
    let mut out = StrategyOutput::new(ctx);
    let principal = inputs.initial_investment.max(0.0);
    let monthly_rate = inputs.interest_rate.max(0.0) / 100.0 / 12.0;
    let months = ctx.months();

    out.total_invested = principal;
    if months == 0 {
        out.final_value = principal;
        return out;
    }

    let installment = emi(principal, monthly_rate, months);

    for year in 1..=ctx.duration_years {
        let paid = year * 12;
        let balance = outstanding_balance(installment, monthly_rate, months - paid);
        let repaid = principal - balance;
        out.rows.push(YearData {
            invested: repaid,
            interest: installment * paid as f64 - repaid,
            total: balance.max(0.0),
            real_value: 0.0,
            ..YearData::new(year, ctx.label(year))
        });
    }

    out.monthly_payment = installment;
    out.final_value = installment * months as f64;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Mode, ProjectionInputs};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn run(inputs: ProjectionInputs) -> StrategyOutput {
        let resolved = inputs.resolve();
        let ctx = ProjectionContext::new(Mode::Loan, &resolved);
        amortize(&ctx, &resolved)
    }

    #[test]
    fn test_emi_known_value() {
        // 100k at 12% over 12 months
        let value = emi(100_000.0, 0.01, 12);
        assert_abs_diff_eq!(value, 8_884.88, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_emi_is_straight_line() {
        assert_eq!(emi(12_000.0, 0.0, 24), 500.0);
        assert_eq!(emi(12_000.0, 0.01, 0), 0.0);
    }

    #[test]
    fn test_balance_reaches_zero() {
        let out = run(ProjectionInputs {
            initial_investment: 250_000.0,
            interest_rate: 7.5,
            time_period_years: 20.0,
            ..Default::default()
        });
        assert_eq!(out.rows.len(), 20);
        let last = out.rows.last().unwrap();
        assert_eq!(last.total, 0.0);
        assert_abs_diff_eq!(last.invested, 250_000.0, epsilon = 1e-6);

        // Balance only ever falls
        for pair in out.rows.windows(2) {
            assert!(pair[1].total < pair[0].total);
        }
    }

    #[test]
    fn test_interest_paid_matches_total_repaid() {
        let out = run(ProjectionInputs {
            initial_investment: 50_000.0,
            interest_rate: 9.0,
            time_period_years: 5.0,
            ..Default::default()
        });
        let last = out.rows.last().unwrap();
        let expected = out.monthly_payment * 60.0 - 50_000.0;
        assert_relative_eq!(last.interest, expected, max_relative = 1e-9);
        assert_relative_eq!(out.final_value - out.total_invested, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_loan_ignores_expense_ratio() {
        let with_fee = run(ProjectionInputs {
            initial_investment: 10_000.0,
            interest_rate: 12.0,
            expense_ratio: 5.0,
            time_period_years: 1.0,
            ..Default::default()
        });
        assert_abs_diff_eq!(with_fee.monthly_payment, 888.488, epsilon = 0.001);
    }

    #[test]
    fn test_zero_rate_loan() {
        let out = run(ProjectionInputs {
            initial_investment: 24_000.0,
            time_period_years: 2.0,
            ..Default::default()
        });
        assert_eq!(out.monthly_payment, 1_000.0);
        assert_eq!(out.final_value, 24_000.0);
        assert_eq!(out.rows[0].interest, 0.0);
        assert_abs_diff_eq!(out.rows[0].total, 12_000.0, epsilon = 1e-9);
        assert!(out.rows.iter().all(|r| r.real_value == 0.0));
    }

    #[test]
    fn test_tiny_rate_amortizes_like_zero_rate() {
        // 1 + r rounds to 1 at this rate
        let out = run(ProjectionInputs {
            initial_investment: 120_000.0,
            interest_rate: 1e-14,
            time_period_years: 10.0,
            ..Default::default()
        });
        assert_relative_eq!(out.monthly_payment, 1_000.0, max_relative = 1e-9);
        assert_relative_eq!(out.final_value, 120_000.0, max_relative = 1e-9);
        assert_eq!(out.rows.last().unwrap().total, 0.0);
    }

    #[test]
    fn test_huge_rate_installment_is_interest_only() {
        // (1+r)^-N underflows, leaving EMI = P*r
        let out = run(ProjectionInputs {
            initial_investment: 1_000.0,
            interest_rate: 1e6,
            time_period_years: 30.0,
            ..Default::default()
        });
        let monthly_rate = 1e6 / 100.0 / 12.0;
        assert_relative_eq!(out.monthly_payment, 1_000.0 * monthly_rate, max_relative = 1e-9);
        assert_relative_eq!(out.final_value, out.monthly_payment * 360.0, max_relative = 1e-12);
        assert!(out.final_value > out.total_invested);
        // Early years repay almost nothing; the balance only clears at the end
        assert_relative_eq!(out.rows[0].total, 1_000.0, max_relative = 1e-9);
        assert!(out.rows.iter().all(|r| r.total.is_finite() && r.interest.is_finite()));
        assert_eq!(out.rows.last().unwrap().total, 0.0);
    }

    #[test]
    fn test_emi_matches_textbook_formula_at_normal_rates() {
        let r: f64 = 0.075 / 12.0;
        let factor = (1.0 + r).powi(240);
        let textbook = 250_000.0 * r * factor / (factor - 1.0);
        assert_relative_eq!(emi(250_000.0, r, 240), textbook, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_duration_loan() {
        let out = run(ProjectionInputs {
            initial_investment: 5_000.0,
            interest_rate: 6.0,
            ..Default::default()
        });
        assert!(out.rows.is_empty());
        assert_eq!(out.monthly_payment, 0.0);
        assert_eq!(out.final_value, out.total_invested);
    }
}
