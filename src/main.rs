//! Finance Projector CLI
//!
//! Command-line interface for running projections

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use finance_projector::{
    advisory::{spawn_advisory, AdvisoryConfig, AdvisoryRequest, RuleBasedAdvisor},
    display::{format_amount, format_percent, Currency},
    export,
    inputs::{load_inputs, load_scenarios},
    project, CalculationResult, Mode, ProjectionInputs, ScenarioRunner,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "finance-projector", version, about = "Project growth, loans, tax and ROI scenarios")]
struct Cli {
    /// Currency symbol and grouping used for display
    #[arg(long, global = true, value_parser = parse_currency, default_value = "USD")]
    currency: Currency,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a single scenario
    Project(ProjectArgs),
    /// Project every scenario in a CSV file and write a summary CSV
    Batch {
        /// Scenario CSV (name,mode,<input columns>)
        scenarios: PathBuf,
        /// Summary output; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Project one scenario across a range of interest rates
    Sweep {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Comma-separated annual rates (%)
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
}

#[derive(Debug, Args)]
struct ProjectArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Write the year-by-year schedule as CSV
    #[arg(long)]
    schedule_csv: Option<PathBuf>,

    /// Write the full result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Append commentary from the rule-based advisor
    #[arg(long)]
    advise: bool,
}

#[derive(Debug, Args)]
struct ScenarioArgs {
    /// Projection mode (SIP, LUMPSUM, COMPOUND, LOAN, STOCK, PROPERTY, ROI, TAX, GOAL, RETIREMENT)
    #[arg(long)]
    mode: Mode,

    /// JSON input record; flags below override its fields
    #[arg(long)]
    inputs: Option<PathBuf>,

    #[arg(long)]
    initial: Option<f64>,
    #[arg(long)]
    monthly: Option<f64>,
    #[arg(long)]
    step_up: Option<f64>,
    #[arg(long)]
    years: Option<f64>,
    #[arg(long)]
    rate: Option<f64>,
    #[arg(long)]
    frequency: Option<u32>,
    #[arg(long)]
    inflation: Option<f64>,
    #[arg(long)]
    tax_rate: Option<f64>,
    #[arg(long)]
    expense_ratio: Option<f64>,
    /// Calendar year for labels; defaults to the current year
    #[arg(long)]
    start_year: Option<i32>,
    #[arg(long)]
    target: Option<f64>,
    /// STOCK: purchase price per share
    #[arg(long)]
    buy_price: Option<f64>,
    /// STOCK and ROI: sale price
    #[arg(long)]
    sell_price: Option<f64>,
    /// STOCK: number of shares
    #[arg(long)]
    quantity: Option<f64>,
    /// STOCK: annual dividend yield (%)
    #[arg(long)]
    dividend_yield: Option<f64>,
    /// PROPERTY: purchase price
    #[arg(long)]
    property_price: Option<f64>,
    /// PROPERTY: monthly rent
    #[arg(long)]
    rent: Option<f64>,
    /// PROPERTY: monthly running costs
    #[arg(long)]
    expenses: Option<f64>,
    /// PROPERTY: annual appreciation (%)
    #[arg(long)]
    appreciation: Option<f64>,
    /// TAX: gross annual income
    #[arg(long)]
    income: Option<f64>,
    /// TAX: total deductions
    #[arg(long)]
    deductions: Option<f64>,
    #[arg(long)]
    current_age: Option<f64>,
    #[arg(long)]
    retirement_age: Option<f64>,
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<ProjectionInputs> {
        let mut inputs = match &self.inputs {
            Some(path) => load_inputs(path).with_context(|| format!("reading {}", path.display()))?,
            None => ProjectionInputs::default(),
        };

        let overrides = [
            (self.initial, &mut inputs.initial_investment),
            (self.monthly, &mut inputs.monthly_contribution),
            (self.step_up, &mut inputs.step_up_rate),
            (self.years, &mut inputs.time_period_years),
            (self.rate, &mut inputs.interest_rate),
            (self.inflation, &mut inputs.inflation_rate),
            (self.tax_rate, &mut inputs.tax_rate),
            (self.expense_ratio, &mut inputs.expense_ratio),
            (self.target, &mut inputs.target_amount),
            (self.buy_price, &mut inputs.buy_price),
            (self.sell_price, &mut inputs.sell_price),
            (self.quantity, &mut inputs.quantity),
            (self.dividend_yield, &mut inputs.dividend_yield),
            (self.property_price, &mut inputs.property_price),
            (self.rent, &mut inputs.rental_income),
            (self.expenses, &mut inputs.monthly_expenses),
            (self.appreciation, &mut inputs.appreciation_rate),
            (self.income, &mut inputs.annual_income),
            (self.deductions, &mut inputs.deductions),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
        if let Some(freq) = self.frequency {
            inputs.compounding_frequency = freq;
        }
        if self.current_age.is_some() {
            inputs.current_age = self.current_age;
        }
        if self.retirement_age.is_some() {
            inputs.retirement_age = self.retirement_age;
        }

        inputs.start_year = match self.start_year {
            Some(year) => year,
            None if self.inputs.is_some() && inputs.start_year != 0 => inputs.start_year,
            None => chrono::Local::now().year(),
        };

        Ok(inputs)
    }
}

fn parse_currency(raw: &str) -> Result<Currency, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_ascii_uppercase()))
        .map_err(|_| format!("unsupported currency '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project(args) => run_project(args, cli.currency).await,
        Command::Batch { scenarios, output } => run_batch(scenarios, output),
        Command::Sweep { scenario, rates } => run_sweep(scenario, rates, cli.currency),
    }
}

async fn run_project(args: ProjectArgs, currency: Currency) -> Result<()> {
    let mode = args.scenario.mode;
    let inputs = args.scenario.resolve()?;
    let result = project(mode, &inputs);

    print_result(&result, currency);

    if let Some(path) = &args.schedule_csv {
        export::export_schedule(&result, path).with_context(|| format!("writing {}", path.display()))?;
        println!("\nSchedule written to: {}", path.display());
    }
    if let Some(path) = &args.json {
        export::export_json(&result, path).with_context(|| format!("writing {}", path.display()))?;
        println!("Result written to: {}", path.display());
    }

    // Figures are already on screen; commentary follows when it arrives
    if args.advise {
        let advisor = Arc::new(RuleBasedAdvisor::new(currency));
        let request = AdvisoryRequest { mode, inputs, result };
        let advice = spawn_advisory(advisor, request, AdvisoryConfig::from_env())
            .await
            .context("advisory task failed")?;

        println!("\nCommentary:");
        println!("  {}", advice.summary);
        for rec in &advice.recommendations {
            println!("  - {}", rec);
        }
        println!("  Risk: {}", advice.risk_assessment);
    }

    Ok(())
}

fn run_batch(scenarios: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let scenarios = load_scenarios(&scenarios).with_context(|| format!("reading {}", scenarios.display()))?;
    let outcomes = ScenarioRunner::run_batch(&scenarios);

    match output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            export::write_batch_summary_csv(&outcomes, file)?;
            println!("{} scenarios written to: {}", outcomes.len(), path.display());
        }
        None => export::write_batch_summary_csv(&outcomes, io::stdout().lock())?,
    }
    Ok(())
}

fn run_sweep(scenario: ScenarioArgs, rates: Vec<f64>, currency: Currency) -> Result<()> {
    let runner = ScenarioRunner::new(scenario.resolve()?);
    let points = runner.sweep_rates(scenario.mode, &rates);

    println!("{:>8} {:>18} {:>18} {:>10}", "Rate", "Final Value", "Post-Tax", "CAGR");
    println!("{}", "-".repeat(57));
    for point in &points {
        println!(
            "{:>8} {:>18} {:>18} {:>10}",
            format_percent(point.interest_rate),
            format_amount(point.result.final_value, currency),
            format_amount(point.result.post_tax_value, currency),
            format_percent(point.result.cagr),
        );
    }
    Ok(())
}

fn print_result(result: &CalculationResult, currency: Currency) {
    let money = |v: f64| format_amount(v, currency);

    println!("{} projection over {} years", result.mode, result.duration_years);
    println!("======================\n");
    println!("  Total Invested:  {}", money(result.total_invested));
    println!("  Final Value:     {}", money(result.final_value));
    println!("  Total Interest:  {}", money(result.total_interest));
    println!("  Tax Payable:     {}", money(result.tax_payable));
    println!("  Post-Tax Value:  {}", money(result.post_tax_value));
    if result.monthly_payment != 0.0 {
        println!("  Monthly Payment: {}", money(result.monthly_payment));
    }
    println!("  ROI:             {}", format_percent(result.roi_percentage));
    println!("  CAGR:            {}", format_percent(result.cagr));
    if result.doubling_time > 0.0 {
        println!("  Doubling Time:   {:.1} years", result.doubling_time);
    }
    println!("  Inflation Drag:  {}", money(result.purchasing_power_loss));

    if result.yearly_data.is_empty() {
        return;
    }
    println!();
    println!("{:>4} {:>6} {:>16} {:>16} {:>16} {:>16}", "Year", "Label", "Invested", "Interest", "Total", "Real Value");
    println!("{}", "-".repeat(79));
    for row in &result.yearly_data {
        println!(
            "{:>4} {:>6} {:>16} {:>16} {:>16} {:>16}",
            row.year,
            row.label,
            money(row.invested),
            money(row.interest),
            money(row.total),
            money(row.real_value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_from(args: &[&str]) -> (Mode, ProjectionInputs) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Project(p) => (p.scenario.mode, p.scenario.resolve().unwrap()),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_stock_flags() {
        let (mode, inputs) = scenario_from(&[
            "finance-projector", "project", "--mode", "stock", "--buy-price", "40", "--sell-price", "95",
            "--quantity", "300", "--dividend-yield", "1.5", "--years", "5",
        ]);
        assert_eq!(mode, Mode::Stock);
        assert_eq!(inputs.buy_price, 40.0);
        assert_eq!(inputs.sell_price, 95.0);
        assert_eq!(inputs.quantity, 300.0);
        assert_eq!(inputs.dividend_yield, 1.5);
    }

    #[test]
    fn test_property_and_tax_flags() {
        let (_, property) = scenario_from(&[
            "finance-projector", "project", "--mode", "property", "--property-price", "300000", "--rent", "1800",
            "--expenses", "600", "--appreciation", "4",
        ]);
        assert_eq!(property.property_price, 300_000.0);
        assert_eq!(property.rental_income, 1_800.0);
        assert_eq!(property.monthly_expenses, 600.0);
        assert_eq!(property.appreciation_rate, 4.0);

        let (mode, tax) = scenario_from(&[
            "finance-projector", "project", "--mode", "TAX", "--income", "60000", "--deductions", "5000",
            "--tax-rate", "15", "--start-year", "2025",
        ]);
        assert_eq!(mode, Mode::Tax);
        assert_eq!(tax.annual_income, 60_000.0);
        assert_eq!(tax.deductions, 5_000.0);
        assert_eq!(tax.start_year, 2025);
        assert_eq!(project(mode, &tax).final_value, 51_750.0);
    }

    #[test]
    fn test_currency_flag() {
        let cli = Cli::try_parse_from(["finance-projector", "--currency", "inr", "sweep", "--mode", "sip", "--rates", "6,8"])
            .unwrap();
        assert_eq!(cli.currency, Currency::Inr);
        match cli.command {
            Command::Sweep { rates, .. } => assert_eq!(rates, vec![6.0, 8.0]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
