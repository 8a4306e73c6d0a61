mod config;
mod policy;
mod rules;

pub use config::JobLimits;

use super::domain::{ClinicalParameter, Finding, FitnessStatus, ParameterKind};
use policy::decide_verdict;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator that classifies exam readings against one job's limits.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    limits: JobLimits,
}

impl EvaluationEngine {
    pub fn new(limits: JobLimits) -> Self {
        Self { limits }
    }

    pub fn evaluate(&self, parameters: &[ClinicalParameter]) -> Verdict {
        let signals = rules::read_signals(parameters, &self.limits);
        let verdict = decide_verdict(signals);

        debug!(
            parameters = parameters.len(),
            signals = verdict.signals.len(),
            status = verdict.suggested_status.as_str(),
            "clinical parameters evaluated"
        );

        verdict
    }
}

/// One-shot evaluation for callers that do not keep an engine around.
pub fn evaluate_parameters(parameters: &[ClinicalParameter], limits: &JobLimits) -> Verdict {
    EvaluationEngine::new(*limits).evaluate(parameters)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSeverity {
    Alert,
    Critical,
}

/// A rule that fired while reading the parameters, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalSignal {
    pub kind: ParameterKind,
    pub severity: SignalSeverity,
    pub note: String,
}

/// Evaluator output; `suggested_status` drives the downstream workflow state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_flagged: bool,
    pub suggested_status: FitnessStatus,
    pub comment: String,
    pub justification: String,
    #[serde(default)]
    pub signals: Vec<ClinicalSignal>,
}

impl Verdict {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.suggested_status.label(), self.comment)
    }

    /// Flagged readings shaped for the remediation designer.
    pub fn findings(&self, parameters: &[ClinicalParameter]) -> Vec<Finding> {
        self.signals
            .iter()
            .filter_map(|signal| {
                parameters
                    .iter()
                    .find(|parameter| parameter.kind == signal.kind)
            })
            .map(Finding::from)
            .collect()
    }
}
