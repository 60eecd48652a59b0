//! Advisory commentary on a finished projection.
//!
//! Advice is an enrichment step: it never changes the numeric result, and
//! any failure (disabled, slow, malformed) degrades to a fixed fallback.

mod rules;

pub use rules::RuleBasedAdvisor;

use crate::inputs::{Mode, ProjectionInputs};
use crate::projection::CalculationResult;
use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const TIMEOUT_ENV: &str = "FINPROJ_ADVISORY_TIMEOUT_MS";
pub const DISABLED_ENV: &str = "FINPROJ_ADVISORY_DISABLED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResult {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risk_assessment: String,
}

impl AdvisoryResult {
    /// Shown whenever no advisor output is available
    pub fn fallback() -> Self {
        Self {
            summary: "Detailed commentary is unavailable right now. The projected figures above are complete."
                .to_string(),
            recommendations: vec![
                "Review the assumed rate of return against long-run historical averages.".to_string(),
                "Revisit the plan yearly and after any major change in income or expenses.".to_string(),
                "Consult a qualified financial adviser before making investment decisions.".to_string(),
            ],
            risk_assessment: "Not assessed.".to_string(),
        }
    }

    /// Parse and validate a JSON payload from a remote generator
    pub fn from_json(payload: &str) -> Result<Self, AdvisoryError> {
        let parsed: AdvisoryResult =
            serde_json::from_str(payload).map_err(|e| AdvisoryError::Malformed(e.to_string()))?;
        if parsed.summary.trim().is_empty() {
            return Err(AdvisoryError::Malformed("empty summary".to_string()));
        }
        Ok(parsed)
    }
}

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("Advisor unavailable: {0}")]
    Unavailable(String),

    #[error("Advisor timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Malformed advisor response: {0}")]
    Malformed(String),

    #[error("Advisor transport error: {0}")]
    Transport(String),
}

/// Everything an advisor gets to look at
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub mode: Mode,
    pub inputs: ProjectionInputs,
    pub result: CalculationResult,
}

#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryResult, AdvisoryError>;
}

#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub enabled: bool,
    /// Upper bound on a single advisor call
    pub timeout: Duration,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AdvisoryConfig {
    /// Defaults overridden by `FINPROJ_ADVISORY_TIMEOUT_MS` and
    /// `FINPROJ_ADVISORY_DISABLED`
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(TIMEOUT_ENV).ok().as_deref(),
            std::env::var(DISABLED_ENV).ok().as_deref(),
        )
    }

    fn from_vars(timeout_ms: Option<&str>, disabled: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => warn!("ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }
        if let Some(flag) = disabled {
            config.enabled = !matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}

/// Ask the advisor, bounded by the configured timeout. Any failure yields
/// [`AdvisoryResult::fallback`].
pub async fn advise_or_fallback(
    advisor: &dyn Advisor,
    request: &AdvisoryRequest,
    config: &AdvisoryConfig,
) -> AdvisoryResult {
    match try_advise(advisor, request, config).await {
        Ok(advice) => advice,
        Err(e) => {
            warn!("advisory for {} fell back: {}", request.mode, e);
            AdvisoryResult::fallback()
        }
    }
}

async fn try_advise(
    advisor: &dyn Advisor,
    request: &AdvisoryRequest,
    config: &AdvisoryConfig,
) -> Result<AdvisoryResult, AdvisoryError> {
    if !config.enabled {
        return Err(AdvisoryError::Unavailable("disabled by configuration".to_string()));
    }
    tokio::time::timeout(config.timeout, advisor.advise(request))
        .await
        .map_err(|_| AdvisoryError::TimedOut(config.timeout))?
}

/// Run the advisor in the background so the caller can present the numeric
/// result straight away. The handle resolves to advice or the fallback.
pub fn spawn_advisory(
    advisor: Arc<dyn Advisor>,
    request: AdvisoryRequest,
    config: AdvisoryConfig,
) -> JoinHandle<AdvisoryResult> {
    tokio::spawn(async move { advise_or_fallback(advisor.as_ref(), &request, &config).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    struct SlowAdvisor;

    #[async_trait]
    impl Advisor for SlowAdvisor {
        async fn advise(&self, _request: &AdvisoryRequest) -> Result<AdvisoryResult, AdvisoryError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(AdvisoryResult {
                summary: "late".to_string(),
                recommendations: vec![],
                risk_assessment: "late".to_string(),
            })
        }
    }

    struct BrokenAdvisor;

    #[async_trait]
    impl Advisor for BrokenAdvisor {
        async fn advise(&self, _request: &AdvisoryRequest) -> Result<AdvisoryResult, AdvisoryError> {
            AdvisoryResult::from_json("{\"summary\": 42}")
        }
    }

    fn request() -> AdvisoryRequest {
        let inputs = ProjectionInputs {
            monthly_contribution: 500.0,
            time_period_years: 10.0,
            interest_rate: 10.0,
            ..Default::default()
        };
        AdvisoryRequest {
            mode: Mode::Sip,
            result: project(Mode::Sip, &inputs),
            inputs,
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let config = AdvisoryConfig {
            enabled: true,
            timeout: Duration::from_millis(20),
        };
        let advice = advise_or_fallback(&SlowAdvisor, &request(), &config).await;
        assert_eq!(advice, AdvisoryResult::fallback());
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back() {
        let advice = advise_or_fallback(&BrokenAdvisor, &request(), &AdvisoryConfig::default()).await;
        assert_eq!(advice, AdvisoryResult::fallback());
    }

    #[tokio::test]
    async fn test_disabled_skips_advisor() {
        let config = AdvisoryConfig {
            enabled: false,
            ..Default::default()
        };
        let advice = advise_or_fallback(&RuleBasedAdvisor::default(), &request(), &config).await;
        assert_eq!(advice, AdvisoryResult::fallback());
    }

    #[tokio::test]
    async fn test_spawned_advice_does_not_touch_result() {
        let req = request();
        let before = req.result.clone();
        let handle = spawn_advisory(Arc::new(RuleBasedAdvisor::default()), req.clone(), AdvisoryConfig::default());
        let advice = handle.await.unwrap();
        assert_ne!(advice, AdvisoryResult::fallback());
        assert_eq!(req.result, before);
    }

    #[test]
    fn test_from_json_validates() {
        let ok = AdvisoryResult::from_json(
            r#"{"summary":"Solid plan","recommendations":["Stay the course"],"riskAssessment":"Moderate"}"#,
        )
        .unwrap();
        assert_eq!(ok.recommendations, vec!["Stay the course".to_string()]);

        assert!(matches!(AdvisoryResult::from_json("not json"), Err(AdvisoryError::Malformed(_))));
        assert!(matches!(
            AdvisoryResult::from_json(r#"{"summary":" ","recommendations":[],"riskAssessment":""}"#),
            Err(AdvisoryError::Malformed(_))
        ));
    }

    #[test]
    fn test_config_from_vars() {
        let config = AdvisoryConfig::from_vars(Some("2500"), None);
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert!(config.enabled);

        let config = AdvisoryConfig::from_vars(Some("soon"), Some("true"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.enabled);
    }
}
