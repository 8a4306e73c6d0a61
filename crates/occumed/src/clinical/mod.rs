//! Clinical readings, the fitness evaluator, and the remediation plan designer.

pub mod domain;
pub mod evaluation;
pub mod remediation;

#[cfg(test)]
mod tests;

pub use domain::{
    BloodPressure, ClinicalParameter, Finding, FitnessStatus, ParameterKind, ParameterValue,
    RawValue,
};
pub use evaluation::{
    evaluate_parameters, ClinicalSignal, EvaluationEngine, JobLimits, SignalSeverity, Verdict,
};
pub use remediation::{
    design_plan, ProbabilityPolicy, RemediationBlueprint, RemediationDesigner, RemediationPlan,
    RemediationRule,
};
