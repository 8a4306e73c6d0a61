use crate::clinical::domain::{ClinicalParameter, Finding};
use crate::clinical::evaluation::{EvaluationEngine, JobLimits};

pub(super) fn job_limits() -> JobLimits {
    JobLimits {
        max_systolic: 140.0,
        max_diastolic: 90.0,
        max_glycemia: 126.0,
        is_high_altitude: false,
    }
}

pub(super) fn high_altitude_limits() -> JobLimits {
    JobLimits {
        max_systolic: 130.0,
        max_diastolic: 85.0,
        max_glycemia: 110.0,
        is_high_altitude: true,
    }
}

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::new(job_limits())
}

pub(super) fn pressure(value: &str) -> ClinicalParameter {
    ClinicalParameter::tagged("Presión Arterial", value)
}

pub(super) fn glycemia(value: f64) -> ClinicalParameter {
    ClinicalParameter::tagged("Glicemia", value)
}

pub(super) fn finding(item: &str, value: f64) -> Finding {
    Finding::tagged(item, value)
}
