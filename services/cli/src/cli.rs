use crate::commands::{
    run_certificate, run_evaluate, run_remediate, run_rut, CertificateCommand, EvaluateArgs,
    RemediateArgs, RutCommand,
};
use clap::{Parser, Subcommand};
use occumed::config::AppConfig;
use occumed::error::AppError;
use occumed::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "occumed",
    about = "Apply occupational-health decision rules to exam data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify exam readings into a fitness verdict
    Evaluate(EvaluateArgs),
    /// Design a remediation plan from flagged findings
    Remediate(RemediateArgs),
    /// Format, normalize or validate a Chilean RUT
    Rut {
        #[command(subcommand)]
        command: RutCommand,
    },
    /// Prepare or verify certificate integrity data
    Certificate {
        #[command(subcommand)]
        command: CertificateCommand,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, &config),
        Command::Remediate(args) => run_remediate(args, &config),
        Command::Rut { command } => run_rut(command),
        Command::Certificate { command } => run_certificate(command, &config),
    }
}
