use super::super::domain::{ClinicalParameter, ParameterKind};
use super::config::JobLimits;
use super::{ClinicalSignal, SignalSeverity};

pub(crate) const CRITICAL_SYSTOLIC: f64 = 180.0;
pub(crate) const CRITICAL_DIASTOLIC: f64 = 110.0;
pub(crate) const CRITICAL_GLYCEMIA: f64 = 200.0;

pub(crate) fn read_signals(
    parameters: &[ClinicalParameter],
    limits: &JobLimits,
) -> Vec<ClinicalSignal> {
    let mut signals = Vec::new();

    // Only the first reading of each kind counts; an unreadable first reading yields nothing.
    let pressure = first_of(parameters, ParameterKind::BloodPressure)
        .and_then(|parameter| parameter.value.as_blood_pressure());
    if let Some(reading) = pressure {
        if reading.systolic >= CRITICAL_SYSTOLIC || reading.diastolic >= CRITICAL_DIASTOLIC {
            signals.push(ClinicalSignal {
                kind: ParameterKind::BloodPressure,
                severity: SignalSeverity::Critical,
                note: format!(
                    "blood pressure {reading} mmHg: hypertensive emergency (>= {CRITICAL_SYSTOLIC}/{CRITICAL_DIASTOLIC})"
                ),
            });
        } else if reading.systolic >= limits.max_systolic
            || reading.diastolic >= limits.max_diastolic
        {
            signals.push(ClinicalSignal {
                kind: ParameterKind::BloodPressure,
                severity: SignalSeverity::Alert,
                note: format!(
                    "blood pressure {reading} mmHg: over job safety limit ({}/{})",
                    limits.max_systolic, limits.max_diastolic
                ),
            });
        }
    }

    let glycemia = first_of(parameters, ParameterKind::Glycemia)
        .and_then(|parameter| parameter.value.as_numeric());
    if let Some(level) = glycemia {
        if level >= CRITICAL_GLYCEMIA {
            signals.push(ClinicalSignal {
                kind: ParameterKind::Glycemia,
                severity: SignalSeverity::Critical,
                note: format!(
                    "glycemia {level} mg/dL: critical diagnostic suspicion (>= {CRITICAL_GLYCEMIA})"
                ),
            });
        } else if level > limits.max_glycemia {
            signals.push(ClinicalSignal {
                kind: ParameterKind::Glycemia,
                severity: SignalSeverity::Alert,
                note: format!(
                    "glycemia {level} mg/dL: elevated over job limit ({})",
                    limits.max_glycemia
                ),
            });
        }
    }

    signals
}

fn first_of(parameters: &[ClinicalParameter], kind: ParameterKind) -> Option<&ClinicalParameter> {
    parameters.iter().find(|parameter| parameter.kind == kind)
}
