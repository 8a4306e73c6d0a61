use serde::{Deserialize, Serialize};

/// Per-occupation medical thresholds supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLimits {
    pub max_systolic: f64,
    pub max_diastolic: f64,
    pub max_glycemia: f64,
    #[serde(default)]
    pub is_high_altitude: bool,
}

impl Default for JobLimits {
    fn default() -> Self {
        Self {
            max_systolic: 140.0,
            max_diastolic: 90.0,
            max_glycemia: 126.0,
            is_high_altitude: false,
        }
    }
}
