use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const BLOOD_PRESSURE_LABELS: &[&str] = &["presión arterial", "presion arterial"];
const GLYCEMIA_LABELS: &[&str] = &["glicemia"];
const BODY_MASS_LABELS: &[&str] = &["imc", "obesidad"];

/// Closed set of clinical signals the rules know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    BloodPressure,
    Glycemia,
    BodyMassIndex,
    Other,
}

impl ParameterKind {
    /// Known kinds in rule priority order.
    pub const fn ordered() -> [Self; 3] {
        [Self::BloodPressure, Self::Glycemia, Self::BodyMassIndex]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BloodPressure => "blood_pressure",
            Self::Glycemia => "glycemia",
            Self::BodyMassIndex => "body_mass_index",
            Self::Other => "other",
        }
    }

    /// Tag a free-text parameter name the way the extraction layer names exam results.
    ///
    /// Matching is a case-insensitive substring test; the first known kind wins.
    pub fn from_label(name: &str) -> Self {
        Self::tags_for(name)
            .into_iter()
            .next()
            .unwrap_or(Self::Other)
    }

    /// Every known kind mentioned by `name`, in priority order.
    pub fn tags_for(name: &str) -> Vec<Self> {
        let lowered = name.to_lowercase();
        Self::ordered()
            .into_iter()
            .filter(|kind| {
                kind.aliases()
                    .iter()
                    .any(|alias| lowered.contains(alias))
            })
            .collect()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::BloodPressure => BLOOD_PRESSURE_LABELS,
            Self::Glycemia => GLYCEMIA_LABELS,
            Self::BodyMassIndex => BODY_MASS_LABELS,
            Self::Other => &[],
        }
    }
}

/// Value exactly as captured upstream: a number or a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(value) => write!(f, "{value}"),
            RawValue::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("blood pressure must be written as systolic/diastolic, got '{0}'")]
pub struct InvalidBloodPressure(pub String);

/// Arterial pressure reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

impl BloodPressure {
    pub fn new(systolic: f64, diastolic: f64) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

impl FromStr for BloodPressure {
    type Err = InvalidBloodPressure;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidBloodPressure(raw.to_string());
        let (systolic, diastolic) = raw.split_once('/').ok_or_else(invalid)?;

        let systolic = parse_finite(systolic).ok_or_else(invalid)?;
        let diastolic = parse_finite(diastolic).ok_or_else(invalid)?;

        Ok(Self::new(systolic, diastolic))
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Typed reading after tolerant coercion. `Unreadable` keeps the original text for audit
/// but never feeds a rule.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    BloodPressure(BloodPressure),
    Numeric(f64),
    Unreadable(String),
}

impl ParameterValue {
    pub fn from_raw(kind: ParameterKind, raw: RawValue) -> Self {
        match (kind, raw) {
            (ParameterKind::BloodPressure, RawValue::Text(text)) => text
                .parse::<BloodPressure>()
                .map(Self::BloodPressure)
                .unwrap_or(Self::Unreadable(text)),
            (ParameterKind::BloodPressure, RawValue::Number(number)) => {
                Self::Unreadable(number.to_string())
            }
            (_, RawValue::Number(number)) if number.is_finite() => Self::Numeric(number),
            (_, RawValue::Number(number)) => Self::Unreadable(number.to_string()),
            (_, RawValue::Text(text)) => match parse_finite(&text) {
                Some(number) => Self::Numeric(number),
                None => Self::Unreadable(text),
            },
        }
    }

    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_blood_pressure(&self) -> Option<BloodPressure> {
        match self {
            Self::BloodPressure(reading) => Some(*reading),
            _ => None,
        }
    }
}

impl From<ParameterValue> for RawValue {
    fn from(value: ParameterValue) -> Self {
        match value {
            ParameterValue::BloodPressure(reading) => RawValue::Text(reading.to_string()),
            ParameterValue::Numeric(number) => RawValue::Number(number),
            ParameterValue::Unreadable(text) => RawValue::Text(text),
        }
    }
}

/// One measured clinical quantity from an exam workstation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParameter", into = "RawParameter")]
pub struct ClinicalParameter {
    pub kind: ParameterKind,
    pub name: String,
    pub value: ParameterValue,
}

impl ClinicalParameter {
    pub fn new(kind: ParameterKind, name: impl Into<String>, value: RawValue) -> Self {
        Self {
            kind,
            name: name.into(),
            value: ParameterValue::from_raw(kind, value),
        }
    }

    /// Build a parameter whose kind is inferred from its display name.
    pub fn tagged(name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        let name = name.into();
        let kind = ParameterKind::from_label(&name);
        Self::new(kind, name, value.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<ParameterKind>,
    name: String,
    value: RawValue,
}

impl From<RawParameter> for ClinicalParameter {
    fn from(raw: RawParameter) -> Self {
        let kind = raw
            .kind
            .unwrap_or_else(|| ParameterKind::from_label(&raw.name));
        Self::new(kind, raw.name, raw.value)
    }
}

impl From<ClinicalParameter> for RawParameter {
    fn from(parameter: ClinicalParameter) -> Self {
        Self {
            kind: Some(parameter.kind),
            name: parameter.name,
            value: parameter.value.into(),
        }
    }
}

/// A flagged parameter carried forward into remediation planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFinding")]
pub struct Finding {
    pub item: String,
    pub value: RawValue,
    pub kinds: Vec<ParameterKind>,
}

impl Finding {
    pub fn new(item: impl Into<String>, value: RawValue, kinds: Vec<ParameterKind>) -> Self {
        Self {
            item: item.into(),
            value,
            kinds,
        }
    }

    /// Build a finding tagged with every kind its item name mentions.
    pub fn tagged(item: impl Into<String>, value: impl Into<RawValue>) -> Self {
        let item = item.into();
        let kinds = ParameterKind::tags_for(&item);
        Self::new(item, value.into(), kinds)
    }

    pub fn concerns(&self, kind: ParameterKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl From<&ClinicalParameter> for Finding {
    fn from(parameter: &ClinicalParameter) -> Self {
        Self::new(
            parameter.name.clone(),
            parameter.value.clone().into(),
            vec![parameter.kind],
        )
    }
}

#[derive(Debug, Deserialize)]
struct RawFinding {
    item: String,
    value: RawValue,
    #[serde(default)]
    kinds: Option<Vec<ParameterKind>>,
}

impl From<RawFinding> for Finding {
    fn from(raw: RawFinding) -> Self {
        let kinds = raw
            .kinds
            .unwrap_or_else(|| ParameterKind::tags_for(&raw.item));
        Self::new(raw.item, raw.value, kinds)
    }
}

/// Occupational fitness classification that drives downstream workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessStatus {
    Fit,
    Remediation,
    Unfit,
}

impl FitnessStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Remediation => "remediation",
            Self::Unfit => "unfit",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fit => "Fit for duty",
            Self::Remediation => "Remediation required",
            Self::Unfit => "Unfit",
        }
    }

    pub const fn requires_follow_up(self) -> bool {
        !matches!(self, Self::Fit)
    }
}

impl fmt::Display for FitnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
