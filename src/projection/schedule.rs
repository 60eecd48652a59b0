//! Year-by-year schedule rows and the projection result snapshot

use crate::inputs::Mode;
use serde::{Deserialize, Serialize};

/// One row of the schedule for an elapsed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    /// Relative year (1-indexed)
    pub year: u32,
    /// Calendar year
    pub label: i32,
    /// Cumulative principal contributed (principal repaid for loans)
    pub invested: f64,
    /// Cumulative gain, interest paid or tax, depending on mode
    pub interest: f64,
    /// Nominal value, or outstanding balance for loans
    pub total: f64,
    /// Inflation-deflated total
    pub real_value: f64,
}

impl YearData {
    pub fn new(year: u32, label: i32) -> Self {
        Self {
            year,
            label,
            invested: 0.0,
            interest: 0.0,
            total: 0.0,
            real_value: 0.0,
        }
    }

    /// Round all monetary columns to whole units
    pub(crate) fn rounded(self) -> Self {
        use super::metrics::round_money;
        Self {
            invested: round_money(self.invested),
            interest: round_money(self.interest),
            total: round_money(self.total),
            real_value: round_money(self.real_value),
            ..self
        }
    }
}

/// Immutable output of one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub mode: Mode,
    pub total_invested: f64,
    pub final_value: f64,
    /// Always `final_value - total_invested`
    pub total_interest: f64,
    pub tax_payable: f64,
    pub post_tax_value: f64,
    pub yearly_data: Vec<YearData>,
    /// Loan EMI or goal contribution; zero for other modes
    pub monthly_payment: f64,
    pub roi_percentage: f64,
    /// Percent per year
    pub cagr: f64,
    pub duration_years: u32,
    /// Rule of 72, in years
    pub doubling_time: f64,
    pub purchasing_power_loss: f64,
}

impl CalculationResult {
    /// Last schedule row, if any
    pub fn last_row(&self) -> Option<&YearData> {
        self.yearly_data.last()
    }

    /// Headline figures without the schedule
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            mode: self.mode,
            duration_years: self.duration_years,
            rows: self.yearly_data.len() as u32,
            total_invested: self.total_invested,
            final_value: self.final_value,
            total_interest: self.total_interest,
            tax_payable: self.tax_payable,
            post_tax_value: self.post_tax_value,
            monthly_payment: self.monthly_payment,
            roi_percentage: self.roi_percentage,
            cagr: self.cagr,
            final_real_value: self.last_row().map(|r| r.real_value).unwrap_or(0.0),
        }
    }
}

/// Condensed view of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub mode: Mode,
    pub duration_years: u32,
    pub rows: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub total_interest: f64,
    pub tax_payable: f64,
    pub post_tax_value: f64,
    pub monthly_payment: f64,
    pub roi_percentage: f64,
    pub cagr: f64,
    pub final_real_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_row() {
        let row = YearData {
            invested: 100.4,
            interest: 20.5,
            total: 120.9,
            real_value: 99.49,
            ..YearData::new(3, 2027)
        }
        .rounded();
        assert_eq!(row.year, 3);
        assert_eq!(row.label, 2027);
        assert_eq!(row.invested, 100.0);
        assert_eq!(row.interest, 21.0);
        assert_eq!(row.total, 121.0);
        assert_eq!(row.real_value, 99.0);
    }

    #[test]
    fn test_summary_reads_last_row() {
        let inputs = crate::inputs::ProjectionInputs {
            initial_investment: 1_000.0,
            interest_rate: 10.0,
            inflation_rate: 10.0,
            time_period_years: 3.0,
            ..Default::default()
        };
        let result = crate::projection::project(Mode::Lumpsum, &inputs);
        let summary = result.summary();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.final_value, 1_331.0);
        assert_eq!(summary.final_real_value, 1_000.0);
        assert_eq!(summary.mode, Mode::Lumpsum);
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let json = serde_json::to_value(YearData::new(1, 2025)).unwrap();
        assert!(json.get("realValue").is_some());
        assert!(json.get("real_value").is_none());
    }
}
