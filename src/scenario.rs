//! Scenario runner for batch projections, rate sweeps and mode comparisons
//!
//! Every projection is independent, so batches fan out across threads with
//! rayon and come back in input order.

use crate::inputs::{Mode, NamedScenario, ProjectionInputs};
use crate::projection::{project, CalculationResult};
use log::info;
use rayon::prelude::*;

/// A named scenario with its projection
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: CalculationResult,
}

/// Result of projecting the base inputs at one interest rate
#[derive(Debug, Clone)]
pub struct RatePoint {
    pub interest_rate: f64,
    pub result: CalculationResult,
}

/// Runs variations of a base input record
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(inputs);
/// for point in runner.sweep_rates(Mode::Sip, &[6.0, 8.0, 10.0]) {
///     println!("{}% -> {}", point.interest_rate, point.result.final_value);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_inputs: ProjectionInputs,
}

impl ScenarioRunner {
    pub fn new(base_inputs: ProjectionInputs) -> Self {
        Self { base_inputs }
    }

    /// Project the base inputs under one mode
    pub fn run(&self, mode: Mode) -> CalculationResult {
        project(mode, &self.base_inputs)
    }

    /// Project the base inputs at each interest rate
    pub fn sweep_rates(&self, mode: Mode, rates: &[f64]) -> Vec<RatePoint> {
        rates
            .par_iter()
            .map(|&rate| {
                let inputs = ProjectionInputs {
                    interest_rate: rate,
                    ..self.base_inputs.clone()
                };
                RatePoint {
                    interest_rate: rate,
                    result: project(mode, &inputs),
                }
            })
            .collect()
    }

    /// Project the base inputs under several modes
    pub fn compare_modes(&self, modes: &[Mode]) -> Vec<CalculationResult> {
        modes.par_iter().map(|&mode| project(mode, &self.base_inputs)).collect()
    }

    /// Project independent named scenarios
    pub fn run_batch(scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        info!("projecting {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| ScenarioOutcome {
                name: s.name.clone(),
                result: project(s.mode, &s.inputs),
            })
            .collect()
    }

    pub fn base_inputs(&self) -> &ProjectionInputs {
        &self.base_inputs
    }
}
