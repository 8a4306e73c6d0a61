use std::env;
use std::fmt;
use std::num::ParseFloatError;

use crate::clinical::remediation::UnknownProbabilityPolicy;
use crate::clinical::{JobLimits, ProbabilityPolicy};

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub certificates: CertificateConfig,
    pub rules: RuleConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("OCCUMED_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("OCCUMED_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let verify_base_url = env::var("OCCUMED_VERIFY_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        if !(verify_base_url.starts_with("http://") || verify_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidVerifyBaseUrl(verify_base_url));
        }

        let defaults = JobLimits::default();
        let job_limits = JobLimits {
            max_systolic: limit_from_env("OCCUMED_MAX_SYSTOLIC", defaults.max_systolic)?,
            max_diastolic: limit_from_env("OCCUMED_MAX_DIASTOLIC", defaults.max_diastolic)?,
            max_glycemia: limit_from_env("OCCUMED_MAX_GLYCEMIA", defaults.max_glycemia)?,
            is_high_altitude: flag_from_env("OCCUMED_HIGH_ALTITUDE")?,
        };

        let probability_policy = match env::var("OCCUMED_PROBABILITY_POLICY") {
            Ok(raw) => raw.parse::<ProbabilityPolicy>()?,
            Err(_) => ProbabilityPolicy::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            certificates: CertificateConfig { verify_base_url },
            rules: RuleConfig {
                job_limits,
                probability_policy,
            },
        })
    }
}

fn limit_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| ConfigError::InvalidLimit {
            name,
            value: raw.clone(),
            source: Some(source),
        })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidLimit {
            name,
            value: raw,
            source: None,
        });
    }

    Ok(value)
}

fn flag_from_env(name: &'static str) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where issued certificates point for public verification.
#[derive(Debug, Clone)]
pub struct CertificateConfig {
    pub verify_base_url: String,
}

/// Defaults fed to the rule components when the caller supplies none.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub job_limits: JobLimits,
    pub probability_policy: ProbabilityPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidVerifyBaseUrl(String),
    InvalidLimit {
        name: &'static str,
        value: String,
        source: Option<ParseFloatError>,
    },
    InvalidFlag {
        name: &'static str,
        value: String,
    },
    InvalidPolicy(UnknownProbabilityPolicy),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVerifyBaseUrl(value) => write!(
                f,
                "OCCUMED_VERIFY_BASE_URL must start with http:// or https:// (got '{value}')"
            ),
            ConfigError::InvalidLimit { name, value, .. } => {
                write!(f, "{name} must be a positive number (got '{value}')")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (got '{value}')")
            }
            ConfigError::InvalidPolicy(err) => write!(f, "OCCUMED_PROBABILITY_POLICY: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLimit {
                source: Some(source),
                ..
            } => Some(source),
            ConfigError::InvalidPolicy(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownProbabilityPolicy> for ConfigError {
    fn from(value: UnknownProbabilityPolicy) -> Self {
        Self::InvalidPolicy(value)
    }
}
