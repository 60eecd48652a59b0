//! Load projection inputs from JSON and named scenario batches from CSV

use super::{Mode, ProjectionInputs};
use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON inputs: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

/// A scenario row from a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub mode: Mode,
    pub inputs: ProjectionInputs,
}

/// Raw CSV row. Columns are optional and blank cells read as absent.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    name: String,
    mode: String,
    #[serde(default)]
    initial_investment: Option<f64>,
    #[serde(default)]
    monthly_contribution: Option<f64>,
    #[serde(default)]
    step_up_rate: Option<f64>,
    #[serde(default)]
    time_period_years: Option<f64>,
    #[serde(default)]
    interest_rate: Option<f64>,
    #[serde(default)]
    compounding_frequency: Option<u32>,
    #[serde(default)]
    inflation_rate: Option<f64>,
    #[serde(default)]
    tax_rate: Option<f64>,
    #[serde(default)]
    expense_ratio: Option<f64>,
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    buy_price: Option<f64>,
    #[serde(default)]
    sell_price: Option<f64>,
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    dividend_yield: Option<f64>,
    #[serde(default)]
    property_price: Option<f64>,
    #[serde(default)]
    rental_income: Option<f64>,
    #[serde(default)]
    monthly_expenses: Option<f64>,
    #[serde(default)]
    appreciation_rate: Option<f64>,
    #[serde(default)]
    annual_income: Option<f64>,
    #[serde(default)]
    deductions: Option<f64>,
    #[serde(default)]
    target_amount: Option<f64>,
    #[serde(default)]
    current_age: Option<f64>,
    #[serde(default)]
    retirement_age: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self) -> Result<NamedScenario, InputError> {
        let mode: Mode = self.mode.parse()?;

        let inputs = ProjectionInputs {
            initial_investment: self.initial_investment.unwrap_or(0.0),
            monthly_contribution: self.monthly_contribution.unwrap_or(0.0),
            step_up_rate: self.step_up_rate.unwrap_or(0.0),
            time_period_years: self.time_period_years.unwrap_or(0.0),
            interest_rate: self.interest_rate.unwrap_or(0.0),
            compounding_frequency: self.compounding_frequency.unwrap_or(0),
            inflation_rate: self.inflation_rate.unwrap_or(0.0),
            tax_rate: self.tax_rate.unwrap_or(0.0),
            expense_ratio: self.expense_ratio.unwrap_or(0.0),
            start_year: self.start_year.unwrap_or(0),
            buy_price: self.buy_price.unwrap_or(0.0),
            sell_price: self.sell_price.unwrap_or(0.0),
            quantity: self.quantity.unwrap_or(0.0),
            dividend_yield: self.dividend_yield.unwrap_or(0.0),
            property_price: self.property_price.unwrap_or(0.0),
            rental_income: self.rental_income.unwrap_or(0.0),
            monthly_expenses: self.monthly_expenses.unwrap_or(0.0),
            appreciation_rate: self.appreciation_rate.unwrap_or(0.0),
            annual_income: self.annual_income.unwrap_or(0.0),
            deductions: self.deductions.unwrap_or(0.0),
            target_amount: self.target_amount.unwrap_or(0.0),
            current_age: self.current_age,
            retirement_age: self.retirement_age,
        };

        Ok(NamedScenario {
            name: self.name,
            mode,
            inputs,
        })
    }
}

/// Load a single input record from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<ProjectionInputs, InputError> {
    let file = File::open(path)?;
    load_inputs_from_reader(BufReader::new(file))
}

/// Load a single input record from any JSON reader
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<ProjectionInputs, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load named scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, InputError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load named scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    Ok(scenarios)
}
