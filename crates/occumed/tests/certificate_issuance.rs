use chrono::NaiveDate;
use occumed::certificate::HASH_SCHEME;
use occumed::{
    evaluate_parameters, rut, verify_integrity, CertificateData, CertificatePreparer,
    ClinicalParameter, JobLimits,
};

#[test]
fn finalized_verdict_becomes_verifiable_certificate() {
    let readings = vec![
        ClinicalParameter::tagged("Presión arterial", "118/76"),
        ClinicalParameter::tagged("Glicemia", 92),
    ];
    let verdict = evaluate_parameters(&readings, &JobLimits::default());

    let data = CertificateData {
        attention_id: "att-7731".to_string(),
        worker_rut: rut::normalize("7.654.321-6"),
        worker_name: "Juan Pérez".to_string(),
        verdict: verdict.suggested_status,
        issue_date: NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date"),
    };
    assert!(rut::is_valid(&data.worker_rut));

    let preparer = CertificatePreparer::new("https://salud.example.cl");
    let certificate = preparer.prepare(data.clone());

    assert!(certificate.is_legally_valid);
    assert!(certificate
        .integrity_hash
        .starts_with(&format!("{HASH_SCHEME}-")));
    assert_eq!(
        certificate.qr_url,
        "https://salud.example.cl/verify/att-7731"
    );

    let reissued = preparer.prepare(data);
    assert!(verify_integrity(
        &reissued.integrity_hash,
        &certificate.integrity_hash
    ));
}

#[test]
fn tampered_metadata_fails_verification() {
    let data: CertificateData = serde_json::from_str(
        r#"{
            "attentionId": "att-9",
            "workerRut": "12345678-5",
            "workerName": "Ana Rojas",
            "verdict": "remediation",
            "issueDate": "2025-08-19"
        }"#,
    )
    .expect("certificate data parses");

    let certificate = CertificatePreparer::new("http://localhost:3000").prepare(data.clone());

    let mut tampered = data;
    tampered.verdict = occumed::FitnessStatus::Fit;
    assert!(!certificate.matches(&tampered));
    assert!(certificate.matches(&certificate.metadata));

    let json = serde_json::to_value(&certificate).expect("certificate serializes");
    assert_eq!(json["isLegallyValid"], true);
    assert_eq!(json["metadata"]["issueDate"], "2025-08-19");
}
