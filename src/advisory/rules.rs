//! Offline advisor built from fixed heuristics over the projection figures

use super::{Advisor, AdvisoryError, AdvisoryRequest, AdvisoryResult};
use crate::display::{format_amount, format_percent, Currency};
use crate::inputs::Mode;
use async_trait::async_trait;

/// Long-run inflation assumed when the scenario does not give one (%)
const REFERENCE_INFLATION: f64 = 6.0;

/// Returns above this look optimistic for a diversified portfolio (%)
const OPTIMISTIC_RATE: f64 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct RuleBasedAdvisor {
    pub currency: Currency,
}

impl RuleBasedAdvisor {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn money(&self, amount: f64) -> String {
        format_amount(amount, self.currency)
    }

    fn summary(&self, request: &AdvisoryRequest) -> String {
        let r = &request.result;
        let years = r.duration_years;
        match request.mode {
            Mode::Loan => format!(
                "Borrowing {} over {} years costs {} a month and {} in total interest.",
                self.money(r.total_invested),
                years,
                self.money(r.monthly_payment),
                self.money(r.total_interest),
            ),
            Mode::Tax => format!(
                "On an income of {} the flat-rate tax is {}, leaving {} after tax.",
                self.money(r.total_invested),
                self.money(r.tax_payable),
                self.money(r.final_value),
            ),
            Mode::Goal => format!(
                "Reaching {} in {} years needs about {} a month.",
                self.money(request.inputs.target_amount),
                years,
                self.money(r.monthly_payment),
            ),
            _ => format!(
                "{} invested grows to {} over {} years ({} a year compounded), or {} after tax.",
                self.money(r.total_invested),
                self.money(r.final_value),
                years,
                format_percent(r.cagr),
                self.money(r.post_tax_value),
            ),
        }
    }

    fn recommendations(&self, request: &AdvisoryRequest) -> Vec<String> {
        let inputs = &request.inputs;
        let r = &request.result;
        let mut recs = Vec::new();

        if inputs.inflation_rate <= 0.0 && request.mode != Mode::Tax {
            recs.push(format!(
                "Add an inflation assumption; at {}% a year prices double roughly every {:.0} years.",
                REFERENCE_INFLATION,
                72.0 / REFERENCE_INFLATION,
            ));
        } else if r.purchasing_power_loss > 0.0 && request.mode != Mode::Loan {
            recs.push(format!(
                "Inflation erodes {} of the final value; judge the plan on the real figure.",
                self.money(r.purchasing_power_loss),
            ));
        }

        if inputs.expense_ratio > 1.0 {
            recs.push(format!(
                "An expense ratio of {} is high; lower-cost funds would compound noticeably more.",
                format_percent(inputs.expense_ratio),
            ));
        }

        match request.mode {
            Mode::Sip | Mode::Retirement if inputs.step_up_rate <= 0.0 => {
                recs.push("Increase the contribution each year in line with salary growth.".to_string());
            }
            Mode::Loan if r.total_interest > r.total_invested * 0.5 => {
                recs.push("Interest exceeds half the principal; consider part-prepayment or a shorter term.".to_string());
            }
            Mode::Stock | Mode::Property => {
                recs.push("A single asset is concentrated; keep it to a sensible share of net worth.".to_string());
            }
            Mode::Tax => {
                recs.push("Check whether further deductions or tax-advantaged contributions apply.".to_string());
            }
            _ => {}
        }

        if recs.is_empty() {
            recs.push("Revisit the plan yearly and rebalance as circumstances change.".to_string());
        }
        recs
    }

    fn risk(&self, request: &AdvisoryRequest) -> String {
        let rate = request.inputs.interest_rate;
        match request.mode {
            Mode::Loan | Mode::Tax => "Low: the figures follow directly from the stated terms.".to_string(),
            Mode::Roi => "Depends entirely on the assumed sale price.".to_string(),
            Mode::Stock => "High: equity prices and dividends can move sharply.".to_string(),
            Mode::Property => "Moderate: vacancies, repairs and local prices can shift the outcome.".to_string(),
            _ if rate > OPTIMISTIC_RATE => format!(
                "High: a {} return is optimistic and unlikely to be sustained.",
                format_percent(rate)
            ),
            _ if rate > 8.0 => "Moderate: returns at this level usually need equity exposure.".to_string(),
            _ => "Low to moderate: the assumed return is conservative.".to_string(),
        }
    }
}

#[async_trait]
impl Advisor for RuleBasedAdvisor {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryResult, AdvisoryError> {
        Ok(AdvisoryResult {
            summary: self.summary(request),
            recommendations: self.recommendations(request),
            risk_assessment: self.risk(request),
        })
    }
}
