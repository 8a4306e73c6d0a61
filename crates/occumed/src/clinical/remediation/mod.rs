mod blueprint;

pub use blueprint::{RemediationBlueprint, RemediationRule};

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Finding;

pub(crate) const BASE_DAYS: u32 = 7;
pub(crate) const BASE_PROBABILITY: u8 = 90;
pub(crate) const FALLBACK_FINDING: &str = "General Clinical Deviation";
pub(crate) const FALLBACK_ACTION: &str = "Comprehensive medical follow-up evaluation.";

/// Which matched rule decides the plan's success probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityPolicy {
    /// The last rule matched across all findings.
    #[default]
    LastMatch,
    /// The rule that supplied the primary finding.
    PrimaryFinding,
}

impl ProbabilityPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastMatch => "last_match",
            Self::PrimaryFinding => "primary_finding",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown probability policy '{0}' (expected last_match or primary_finding)")]
pub struct UnknownProbabilityPolicy(pub String);

impl FromStr for ProbabilityPolicy {
    type Err = UnknownProbabilityPolicy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "last_match" | "last" => Ok(Self::LastMatch),
            "primary_finding" | "primary" => Ok(Self::PrimaryFinding),
            _ => Err(UnknownProbabilityPolicy(raw.to_string())),
        }
    }
}

impl fmt::Display for ProbabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-boxed recovery plan for a worker flagged at evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationPlan {
    pub primary_finding: String,
    pub actions: Vec<String>,
    pub estimated_days: u32,
    pub success_probability: u8,
}

impl RemediationPlan {
    fn fallback() -> Self {
        Self {
            primary_finding: FALLBACK_FINDING.to_string(),
            actions: vec![FALLBACK_ACTION.to_string()],
            estimated_days: BASE_DAYS,
            success_probability: BASE_PROBABILITY,
        }
    }

    /// Date by which the plan should be completed, counted from the issue date.
    pub fn target_date(&self, issue_date: NaiveDate) -> NaiveDate {
        issue_date + Duration::days(i64::from(self.estimated_days))
    }
}

/// Folds every rule matched by the findings into a single plan.
#[derive(Debug, Clone, Default)]
pub struct RemediationDesigner {
    blueprint: RemediationBlueprint,
    policy: ProbabilityPolicy,
}

impl RemediationDesigner {
    pub fn new(policy: ProbabilityPolicy) -> Self {
        Self::with_blueprint(RemediationBlueprint::standard(), policy)
    }

    pub fn with_blueprint(blueprint: RemediationBlueprint, policy: ProbabilityPolicy) -> Self {
        Self { blueprint, policy }
    }

    pub fn design(&self, findings: &[Finding]) -> RemediationPlan {
        let mut fold = PlanFold::default();

        for finding in findings {
            for rule in self.blueprint.rules() {
                if finding.concerns(rule.kind) {
                    fold.absorb(rule);
                }
            }
        }

        let plan = fold.finish(self.policy);
        debug!(
            findings = findings.len(),
            actions = plan.actions.len(),
            estimated_days = plan.estimated_days,
            policy = self.policy.as_str(),
            "remediation plan designed"
        );
        plan
    }
}

/// Design a plan with the standard rule table and default probability policy.
pub fn design_plan(findings: &[Finding]) -> RemediationPlan {
    RemediationDesigner::default().design(findings)
}

#[derive(Default)]
struct PlanFold {
    primary: Option<(&'static str, u8)>,
    actions: Vec<String>,
    minimum_days: u32,
    last_probability: Option<u8>,
}

impl PlanFold {
    fn absorb(&mut self, rule: &RemediationRule) {
        if self.primary.is_none() {
            self.primary = Some((rule.primary_finding, rule.success_probability));
        }
        self.actions
            .extend(rule.actions.iter().map(|action| action.to_string()));
        self.minimum_days = self.minimum_days.max(rule.minimum_days);
        self.last_probability = Some(rule.success_probability);
    }

    fn finish(self, policy: ProbabilityPolicy) -> RemediationPlan {
        let Some((primary_finding, primary_probability)) = self.primary else {
            return RemediationPlan::fallback();
        };

        let success_probability = match policy {
            ProbabilityPolicy::LastMatch => self.last_probability.unwrap_or(primary_probability),
            ProbabilityPolicy::PrimaryFinding => primary_probability,
        };

        RemediationPlan {
            primary_finding: primary_finding.to_string(),
            actions: self.actions,
            estimated_days: BASE_DAYS.max(self.minimum_days),
            success_probability,
        }
    }
}
