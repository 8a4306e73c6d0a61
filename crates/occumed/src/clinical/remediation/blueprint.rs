use super::super::domain::ParameterKind;

/// How one kind of finding shapes a recovery plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RemediationRule {
    pub kind: ParameterKind,
    pub primary_finding: &'static str,
    pub actions: Vec<&'static str>,
    pub minimum_days: u32,
    pub success_probability: u8,
}

/// Ordered rule table; earlier rules win the primary finding when one finding matches several.
#[derive(Debug, Clone)]
pub struct RemediationBlueprint {
    rules: Vec<RemediationRule>,
}

impl RemediationBlueprint {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn rules(&self) -> &[RemediationRule] {
        &self.rules
    }

    pub fn rule_for(&self, kind: ParameterKind) -> Option<&RemediationRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

impl Default for RemediationBlueprint {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_rules() -> Vec<RemediationRule> {
    vec![
        RemediationRule {
            kind: ParameterKind::BloodPressure,
            primary_finding: "Mild Arterial Hypertension",
            actions: vec![
                "Ambulatory blood pressure monitoring for 7 days.",
                "Dietary sodium reduction with nutritional counselling.",
                "Referral to internal medicine or cardiology for assessment.",
            ],
            minimum_days: 10,
            success_probability: 85,
        },
        RemediationRule {
            kind: ParameterKind::Glycemia,
            primary_finding: "Elevated Glycemia / Pre-diabetes",
            actions: vec![
                "Nutritional evaluation and dietary plan.",
                "Repeat fasting glycemia test in 7 days.",
                "Complete lipid profile.",
            ],
            minimum_days: 14,
            success_probability: 95,
        },
        RemediationRule {
            kind: ParameterKind::BodyMassIndex,
            primary_finding: "Cardiovascular Risk (BMI)",
            actions: vec![
                "Guided physical conditioning program.",
                "Weekly weight and waist measurement tracking.",
            ],
            minimum_days: 30,
            success_probability: 75,
        },
    ]
}
