//! Decision rules behind the occupational-health clinic workflow.
//!
//! Every rule component here is a synchronous, side-effect-free function of its input:
//! the clinical evaluator, the remediation plan designer, the RUT helpers and the
//! certificate preparer. Persistence, rendering and extraction live with the callers.

pub mod certificate;
pub mod clinical;
pub mod config;
pub mod error;
pub mod rut;
pub mod telemetry;

pub use certificate::{verify_integrity, CertificateData, CertificatePreparer, LegalCertificate};
pub use clinical::{
    design_plan, evaluate_parameters, ClinicalParameter, EvaluationEngine, Finding,
    FitnessStatus, JobLimits, ParameterKind, ProbabilityPolicy, RemediationDesigner,
    RemediationPlan, Verdict,
};
pub use rut::{Rut, RutError};
