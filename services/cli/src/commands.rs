use crate::infra::{parse_date, print_json, read_json};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use occumed::config::AppConfig;
use occumed::error::AppError;
use occumed::{
    rut, verify_integrity, CertificateData, CertificatePreparer, ClinicalParameter,
    EvaluationEngine, Finding, JobLimits, ProbabilityPolicy, RemediationDesigner,
    RemediationPlan, Rut,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON array of {name, value} readings (`-` for stdin)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the job's maximum systolic pressure
    #[arg(long)]
    pub(crate) max_systolic: Option<f64>,
    /// Override the job's maximum diastolic pressure
    #[arg(long)]
    pub(crate) max_diastolic: Option<f64>,
    /// Override the job's maximum glycemia
    #[arg(long)]
    pub(crate) max_glycemia: Option<f64>,
    /// Mark the job as high altitude
    #[arg(long)]
    pub(crate) high_altitude: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RemediateArgs {
    /// JSON array of {item, value} findings (`-` for stdin)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Issue date used to compute the plan's target date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) issue_date: Option<NaiveDate>,
    /// Which matched rule sets the success probability
    #[arg(long)]
    pub(crate) policy: Option<ProbabilityPolicy>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum RutCommand {
    /// Render as 12.345.678-5
    Format { value: String },
    /// Render as 12345678-5
    Normalize { value: String },
    /// Check the modulus-11 check digit
    Validate { value: String },
}

#[derive(Subcommand, Debug)]
pub(crate) enum CertificateCommand {
    /// Hash certificate metadata and build its verification URL
    Prepare {
        /// JSON certificate metadata (`-` for stdin)
        #[arg(long)]
        input: PathBuf,
    },
    /// Compare a presented hash with the stored original
    Verify {
        #[arg(long)]
        presented: String,
        #[arg(long)]
        original: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    #[serde(flatten)]
    plan: RemediationPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_date: Option<NaiveDate>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs, config: &AppConfig) -> Result<(), AppError> {
    let defaults = config.rules.job_limits;
    let limits = JobLimits {
        max_systolic: args.max_systolic.unwrap_or(defaults.max_systolic),
        max_diastolic: args.max_diastolic.unwrap_or(defaults.max_diastolic),
        max_glycemia: args.max_glycemia.unwrap_or(defaults.max_glycemia),
        is_high_altitude: args.high_altitude || defaults.is_high_altitude,
    };

    let parameters: Vec<ClinicalParameter> = read_json(&args.input)?;
    let verdict = EvaluationEngine::new(limits).evaluate(&parameters);
    info!(
        status = verdict.suggested_status.as_str(),
        summary = %verdict.summary(),
        "evaluation complete"
    );

    print_json(&verdict)
}

pub(crate) fn run_remediate(args: RemediateArgs, config: &AppConfig) -> Result<(), AppError> {
    let findings: Vec<Finding> = read_json(&args.input)?;
    let policy = args.policy.unwrap_or(config.rules.probability_policy);

    let plan = RemediationDesigner::new(policy).design(&findings);
    let target_date = args.issue_date.map(|issued| plan.target_date(issued));
    info!(
        primary_finding = %plan.primary_finding,
        estimated_days = plan.estimated_days,
        "remediation plan ready"
    );

    print_json(&PlanResponse { plan, target_date })
}

pub(crate) fn run_rut(command: RutCommand) -> Result<(), AppError> {
    match command {
        RutCommand::Format { value } => println!("{}", rut::format_for_display(&value)),
        RutCommand::Normalize { value } => println!("{}", rut::normalize(&value)),
        RutCommand::Validate { value } => {
            let parsed = Rut::parse(&value)?;
            println!("{parsed} is valid");
        }
    }
    Ok(())
}

pub(crate) fn run_certificate(
    command: CertificateCommand,
    config: &AppConfig,
) -> Result<(), AppError> {
    match command {
        CertificateCommand::Prepare { input } => {
            let data: CertificateData = read_json(&input)?;
            let preparer = CertificatePreparer::new(config.certificates.verify_base_url.as_str());
            print_json(&preparer.prepare(data))
        }
        CertificateCommand::Verify {
            presented,
            original,
        } => print_json(&json!({ "valid": verify_integrity(&presented, &original) })),
    }
}
