//! Scenario modes and the flat input record consumed by the projection engine

pub mod loader;

pub use loader::{load_inputs, load_inputs_from_reader, load_scenarios, load_scenarios_from_reader, InputError, NamedScenario};

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Financial model selected for a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Recurring monthly contribution with optional lump sum and annual step-up
    Sip,
    /// Single deposit compounded annually
    Lumpsum,
    /// Single deposit with selectable compounding frequency
    Compound,
    /// Amortizing loan
    Loan,
    /// Equity position with linear dividends
    Stock,
    /// Rental property with appreciation
    Property,
    /// Simple before/after valuation
    Roi,
    /// Flat effective-rate income tax
    Tax,
    /// Solve the monthly contribution needed to reach a target
    Goal,
    /// SIP bounded by current and retirement age
    Retirement,
}

impl Mode {
    pub const ALL: [Mode; 10] = [
        Mode::Sip,
        Mode::Lumpsum,
        Mode::Compound,
        Mode::Loan,
        Mode::Stock,
        Mode::Property,
        Mode::Roi,
        Mode::Tax,
        Mode::Goal,
        Mode::Retirement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Sip => "SIP",
            Mode::Lumpsum => "LUMPSUM",
            Mode::Compound => "COMPOUND",
            Mode::Loan => "LOAN",
            Mode::Stock => "STOCK",
            Mode::Property => "PROPERTY",
            Mode::Roi => "ROI",
            Mode::Tax => "TAX",
            Mode::Goal => "GOAL",
            Mode::Retirement => "RETIREMENT",
        }
    }

    /// Whether gains in this mode are subject to the tax-on-gain stage
    pub fn taxes_gains(&self) -> bool {
        !matches!(self, Mode::Loan | Mode::Tax)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownMode(wanted.to_string()))
    }
}

/// Flat scenario parameters. Every field is optional on the wire and
/// defaults to zero; which fields matter depends on the [`Mode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionInputs {
    // Core
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    /// Annual increase of the monthly contribution (%)
    pub step_up_rate: f64,
    pub time_period_years: f64,
    /// Nominal annual rate (%)
    pub interest_rate: f64,
    /// Compounding periods per year (1, 2, 4 or 12); 0 means annual
    pub compounding_frequency: u32,
    pub inflation_rate: f64,
    pub tax_rate: f64,
    /// Annual fee (%) deducted from the growth rate
    pub expense_ratio: f64,
    /// Calendar year the schedule is labelled from
    pub start_year: i32,

    // Equity
    pub buy_price: f64,
    pub sell_price: f64,
    pub quantity: f64,
    pub dividend_yield: f64,

    // Property
    pub property_price: f64,
    /// Monthly rent
    pub rental_income: f64,
    pub monthly_expenses: f64,
    pub appreciation_rate: f64,

    // Tax
    pub annual_income: f64,
    pub deductions: f64,

    // Goal
    pub target_amount: f64,

    // Retirement
    pub current_age: Option<f64>,
    pub retirement_age: Option<f64>,
}

/// Inputs after defensive substitution: every number is finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInputs {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub step_up_rate: f64,
    pub time_period_years: f64,
    pub interest_rate: f64,
    pub compounding_frequency: u32,
    pub inflation_rate: f64,
    pub tax_rate: f64,
    pub expense_ratio: f64,
    pub start_year: i32,
    pub buy_price: f64,
    pub sell_price: f64,
    pub quantity: f64,
    pub dividend_yield: f64,
    pub property_price: f64,
    pub rental_income: f64,
    pub monthly_expenses: f64,
    pub appreciation_rate: f64,
    pub annual_income: f64,
    pub deductions: f64,
    pub target_amount: f64,
    pub current_age: Option<f64>,
    pub retirement_age: Option<f64>,
}

impl ProjectionInputs {
    /// Replace non-finite numbers with zero (ages with "not supplied")
    pub fn resolve(&self) -> ResolvedInputs {
        ResolvedInputs {
            initial_investment: finite_or_zero("initialInvestment", self.initial_investment),
            monthly_contribution: finite_or_zero("monthlyContribution", self.monthly_contribution),
            step_up_rate: finite_or_zero("stepUpRate", self.step_up_rate),
            time_period_years: finite_or_zero("timePeriodYears", self.time_period_years),
            interest_rate: finite_or_zero("interestRate", self.interest_rate),
            compounding_frequency: self.compounding_frequency,
            inflation_rate: finite_or_zero("inflationRate", self.inflation_rate),
            tax_rate: finite_or_zero("taxRate", self.tax_rate),
            expense_ratio: finite_or_zero("expenseRatio", self.expense_ratio),
            start_year: self.start_year,
            buy_price: finite_or_zero("buyPrice", self.buy_price),
            sell_price: finite_or_zero("sellPrice", self.sell_price),
            quantity: finite_or_zero("quantity", self.quantity),
            dividend_yield: finite_or_zero("dividendYield", self.dividend_yield),
            property_price: finite_or_zero("propertyPrice", self.property_price),
            rental_income: finite_or_zero("rentalIncome", self.rental_income),
            monthly_expenses: finite_or_zero("monthlyExpenses", self.monthly_expenses),
            appreciation_rate: finite_or_zero("appreciationRate", self.appreciation_rate),
            annual_income: finite_or_zero("annualIncome", self.annual_income),
            deductions: finite_or_zero("deductions", self.deductions),
            target_amount: finite_or_zero("targetAmount", self.target_amount),
            current_age: self.current_age.filter(|a| a.is_finite()),
            retirement_age: self.retirement_age.filter(|a| a.is_finite()),
        }
    }
}

fn finite_or_zero(field: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("non-finite {} ({}) replaced with 0", field, value);
        0.0
    }
}
