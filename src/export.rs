//! Schedule and result export

use crate::projection::{CalculationResult, YearData};
use crate::scenario::ScenarioOutcome;
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub const SCHEDULE_HEADER: [&str; 6] = ["Year", "CalendarYear", "Invested", "Interest", "Total", "RealValue"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the schedule as CSV: header row, then one row per year
pub fn write_schedule_csv<W: Write>(rows: &[YearData], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(SCHEDULE_HEADER)?;

    for row in rows {
        csv_writer.write_record(&[
            row.year.to_string(),
            row.label.to_string(),
            format!("{:.0}", row.invested),
            format!("{:.0}", row.interest),
            format!("{:.0}", row.total),
            format!("{:.0}", row.real_value),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Schedule CSV as a string
pub fn schedule_to_csv_string(rows: &[YearData]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_schedule_csv(rows, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the schedule CSV to a file
pub fn export_schedule<P: AsRef<Path>>(result: &CalculationResult, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_schedule_csv(&result.yearly_data, file)
}

/// Write the full result as pretty JSON
pub fn export_json<P: AsRef<Path>>(result: &CalculationResult, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, result)?;
    Ok(())
}

/// One line of a batch report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummaryRow<'a> {
    name: &'a str,
    mode: String,
    duration_years: u32,
    total_invested: f64,
    final_value: f64,
    total_interest: f64,
    tax_payable: f64,
    post_tax_value: f64,
    monthly_payment: f64,
    cagr: String,
    roi_percentage: String,
}

/// Write headline figures for each scenario in a batch
pub fn write_batch_summary_csv<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);

    for outcome in outcomes {
        let s = outcome.result.summary();
        csv_writer.serialize(BatchSummaryRow {
            name: &outcome.name,
            mode: s.mode.to_string(),
            duration_years: s.duration_years,
            total_invested: s.total_invested,
            final_value: s.final_value,
            total_interest: s.total_interest,
            tax_payable: s.tax_payable,
            post_tax_value: s.post_tax_value,
            monthly_payment: s.monthly_payment,
            cagr: format!("{:.4}", s.cagr),
            roi_percentage: format!("{:.4}", s.roi_percentage),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
