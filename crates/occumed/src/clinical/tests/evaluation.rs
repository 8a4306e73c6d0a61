use super::common::*;
use crate::clinical::domain::{ClinicalParameter, FitnessStatus, ParameterKind};
use crate::clinical::evaluation::{evaluate_parameters, EvaluationEngine, SignalSeverity};

#[test]
fn engine_flags_hypertensive_emergency_as_unfit() {
    let engine = evaluation_engine();

    let verdict = engine.evaluate(&[pressure("190/70")]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Unfit);
    assert!(verdict.is_flagged);
    assert!(verdict.comment.contains('1'));
    assert!(verdict.justification.contains("hypertensive emergency"));
}

#[test]
fn diastolic_emergency_alone_is_critical() {
    let verdict = evaluation_engine().evaluate(&[pressure("150/110")]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Unfit);
    assert_eq!(verdict.signals.len(), 1);
    assert_eq!(verdict.signals[0].severity, SignalSeverity::Critical);
}

#[test]
fn pressure_over_job_limit_requires_remediation() {
    let verdict = evaluation_engine().evaluate(&[pressure("145/88")]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Remediation);
    assert!(verdict.is_flagged);
    assert!(verdict.justification.contains("over job safety limit"));
}

#[test]
fn pressure_limits_are_inclusive() {
    let at_limit = evaluation_engine().evaluate(&[pressure("140/80")]);
    assert_eq!(at_limit.suggested_status, FitnessStatus::Remediation);

    let below = evaluation_engine().evaluate(&[pressure("139/89")]);
    assert_eq!(below.suggested_status, FitnessStatus::Fit);
}

#[test]
fn critical_pressure_does_not_also_raise_an_alert() {
    let verdict = evaluation_engine().evaluate(&[pressure("185/95")]);

    assert_eq!(verdict.signals.len(), 1);
    assert!(verdict
        .signals
        .iter()
        .all(|signal| signal.severity == SignalSeverity::Critical));
}

#[test]
fn glycemia_below_limit_is_fit() {
    let verdict = evaluation_engine().evaluate(&[glycemia(115.0)]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
    assert!(!verdict.is_flagged);
    assert!(verdict.signals.is_empty());
}

#[test]
fn glycemia_at_limit_is_still_fit() {
    let verdict = evaluation_engine().evaluate(&[glycemia(126.0)]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
}

#[test]
fn glycemia_over_limit_requires_remediation() {
    let verdict = evaluation_engine().evaluate(&[glycemia(130.0)]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Remediation);
    assert!(verdict.justification.contains("elevated over job limit"));
}

#[test]
fn critical_glycemia_is_unfit() {
    let verdict = evaluation_engine().evaluate(&[glycemia(205.0)]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Unfit);
    assert!(verdict.justification.contains("critical diagnostic suspicion"));
}

#[test]
fn critical_findings_dominate_alerts_across_parameters() {
    let verdict = evaluation_engine().evaluate(&[pressure("182/100"), glycemia(140.0)]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Unfit);
    assert_eq!(verdict.signals.len(), 2);
    assert!(verdict.justification.contains("hypertensive emergency"));
    assert!(verdict.justification.contains("elevated over job limit"));
}

#[test]
fn only_the_first_reading_of_each_kind_is_used() {
    let verdict = evaluation_engine().evaluate(&[pressure("120/80"), pressure("200/120")]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
}

#[test]
fn malformed_pressure_contributes_nothing() {
    let verdict = evaluation_engine().evaluate(&[pressure("abc/def"), glycemia(100.0)]);
    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);

    // The malformed first reading still shadows a later valid one.
    let shadowed = evaluation_engine().evaluate(&[pressure("190/"), pressure("190/70")]);
    assert_eq!(shadowed.suggested_status, FitnessStatus::Fit);
}

#[test]
fn numeric_pressure_and_textual_glycemia_are_tolerated() {
    let parameters = vec![
        ClinicalParameter::tagged("Presión arterial", 190),
        ClinicalParameter::tagged("Glicemia", "210"),
    ];

    let verdict = evaluation_engine().evaluate(&parameters);

    assert_eq!(verdict.suggested_status, FitnessStatus::Unfit);
    assert_eq!(verdict.signals.len(), 1);
    assert_eq!(verdict.signals[0].kind, ParameterKind::Glycemia);
}

#[test]
fn unrelated_parameters_are_ignored() {
    let parameters = vec![
        ClinicalParameter::tagged("IMC", 41.0),
        ClinicalParameter::tagged("Audiometría", "hipoacusia"),
    ];

    let verdict = evaluation_engine().evaluate(&parameters);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
}

#[test]
fn empty_input_is_fit() {
    let verdict = evaluation_engine().evaluate(&[]);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
    assert!(!verdict.comment.is_empty());
    assert!(!verdict.justification.is_empty());
}

#[test]
fn stricter_job_limits_change_the_outcome() {
    let reading = [pressure("132/84")];

    let standard = evaluation_engine().evaluate(&reading);
    let altitude = EvaluationEngine::new(high_altitude_limits()).evaluate(&reading);

    assert_eq!(standard.suggested_status, FitnessStatus::Fit);
    assert_eq!(altitude.suggested_status, FitnessStatus::Remediation);
}

#[test]
fn evaluation_is_repeatable() {
    let parameters = vec![pressure("145/95"), glycemia(150.0)];

    let first = evaluate_parameters(&parameters, &job_limits());
    let second = evaluate_parameters(&parameters, &job_limits());

    assert_eq!(first, second);
}

#[test]
fn verdict_exposes_flagged_findings() {
    let parameters = vec![pressure("145/88"), glycemia(100.0), glycemia(300.0)];

    let verdict = evaluation_engine().evaluate(&parameters);
    let findings = verdict.findings(&parameters);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].item, "Presión Arterial");
    assert!(findings[0].concerns(ParameterKind::BloodPressure));
}

#[test]
fn only_glicemia_names_count_as_glycemia() {
    let parameters = vec![
        ClinicalParameter::tagged("Glucose tolerance 2h", 250.0),
        glycemia(100.0),
    ];

    let verdict = evaluate_parameters(&parameters, &job_limits());

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
    assert!(verdict.signals.is_empty());
}

#[test]
fn english_named_readings_are_ignored() {
    let parameters = vec![
        ClinicalParameter::tagged("Blood pressure", "200/120"),
        ClinicalParameter::tagged("Glycemia", 300.0),
    ];

    let verdict = evaluation_engine().evaluate(&parameters);

    assert_eq!(verdict.suggested_status, FitnessStatus::Fit);
    assert!(!verdict.is_flagged);
}

#[test]
fn summary_pairs_status_label_with_comment() {
    let verdict = evaluation_engine().evaluate(&[pressure("190/70")]);

    assert_eq!(
        verdict.summary(),
        "Unfit: 1 critical finding(s) detected; worker is not fit for the role"
    );

    let fit = evaluation_engine().evaluate(&[glycemia(90.0)]);
    assert!(fit.summary().starts_with("Fit for duty: "));
}
