use super::super::domain::FitnessStatus;
use super::{ClinicalSignal, SignalSeverity, Verdict};

const CRITICAL_FALLBACK: &str = "Critical values detected in the clinical record.";
const ALERT_FALLBACK: &str = "Values outside the safety limits defined for the job.";
const FIT_COMMENT: &str = "All evaluated parameters are within the job limits.";
const FIT_JUSTIFICATION: &str = "No clinical reading exceeds the occupational thresholds.";

pub(crate) fn decide_verdict(signals: Vec<ClinicalSignal>) -> Verdict {
    let critical = count(&signals, SignalSeverity::Critical);
    let alert = count(&signals, SignalSeverity::Alert);

    if critical > 0 {
        return Verdict {
            is_flagged: true,
            suggested_status: FitnessStatus::Unfit,
            comment: format!("{critical} critical finding(s) detected; worker is not fit for the role"),
            justification: justify(&signals, CRITICAL_FALLBACK),
            signals,
        };
    }

    if alert > 0 {
        return Verdict {
            is_flagged: true,
            suggested_status: FitnessStatus::Remediation,
            comment: format!("{alert} finding(s) over job limits; remediation plan required"),
            justification: justify(&signals, ALERT_FALLBACK),
            signals,
        };
    }

    Verdict {
        is_flagged: false,
        suggested_status: FitnessStatus::Fit,
        comment: FIT_COMMENT.to_string(),
        justification: FIT_JUSTIFICATION.to_string(),
        signals,
    }
}

fn count(signals: &[ClinicalSignal], severity: SignalSeverity) -> usize {
    signals
        .iter()
        .filter(|signal| signal.severity == severity)
        .count()
}

fn justify(signals: &[ClinicalSignal], fallback: &str) -> String {
    if signals.is_empty() {
        return fallback.to_string();
    }

    signals
        .iter()
        .map(|signal| signal.note.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
