//! AWS Lambda handler for running projections
//!
//! Accepts `{ "mode": "SIP", "inputs": { ... }, "advise": true }` and returns
//! the numeric result, plus time-bounded commentary when requested.

use finance_projector::{
    advisory::{advise_or_fallback, AdvisoryConfig, AdvisoryRequest, AdvisoryResult, RuleBasedAdvisor},
    display::Currency,
    project, CalculationResult, Mode, ProjectionInputs,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub mode: Mode,

    /// Missing fields default to zero
    #[serde(default)]
    pub inputs: ProjectionInputs,

    /// Whether to attach advisory commentary
    #[serde(default)]
    pub advise: bool,

    /// Currency used in commentary text
    #[serde(default)]
    pub currency: Currency,
}

/// Output payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub result: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<AdvisoryResult>,
    pub execution_time_ms: u64,
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let start = Instant::now();
    let request = event.payload;
    log::info!("projecting {} (advise: {})", request.mode, request.advise);

    let result = project(request.mode, &request.inputs);

    let advisory = if request.advise {
        let advisor = RuleBasedAdvisor::new(request.currency);
        let advisory_request = AdvisoryRequest {
            mode: request.mode,
            inputs: request.inputs,
            result: result.clone(),
        };
        Some(advise_or_fallback(&advisor, &advisory_request, &AdvisoryConfig::from_env()).await)
    } else {
        None
    };

    Ok(ProjectionResponse {
        result,
        advisory,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
