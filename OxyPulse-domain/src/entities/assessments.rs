use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Lowest hemoglobin value ever reported, g/dL
pub const HEMOGLOBIN_MIN: f64 = 7.0;

/// Highest hemoglobin value ever reported, g/dL
pub const HEMOGLOBIN_MAX: f64 = 18.0;

/// Estimated hemoglobin concentration in g/dL, always within
/// [`HEMOGLOBIN_MIN`, `HEMOGLOBIN_MAX`]
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HemoglobinEstimate {
    value: f64,
}

impl HemoglobinEstimate {
    /// Clamp a raw estimate into the reportable range
    pub fn new(raw: f64) -> Self {
        Self {
            value: raw.clamp(HEMOGLOBIN_MIN, HEMOGLOBIN_MAX),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Two-decimal rendering used in API responses
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Fatigue category with a fixed ordinal mapping (0, 1, 2)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum FatigueLevel {
    Low,
    Moderate,
    High,
}

impl FatigueLevel {
    /// Map a classifier output to a level. Unknown ordinals yield `None`.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(FatigueLevel::Low),
            1 => Some(FatigueLevel::Moderate),
            2 => Some(FatigueLevel::High),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            FatigueLevel::Low => 0,
            FatigueLevel::Moderate => 1,
            FatigueLevel::High => 2,
        }
    }

    /// Human-readable label shown on the results page
    pub fn label(&self) -> &'static str {
        match self {
            FatigueLevel::Low => "Low Fatigue",
            FatigueLevel::Moderate => "Moderate Fatigue",
            FatigueLevel::High => "High Fatigue",
        }
    }
}

impl std::fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stress bucket derived from the stress score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum StressLevel {
    #[serde(rename = "Low Stress")]
    Low,
    #[serde(rename = "Moderate Stress")]
    Moderate,
    #[serde(rename = "High Stress")]
    High,
}

impl StressLevel {
    /// Bucket a 0-100 score: `>= 70` high, `>= 30` moderate, otherwise low
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            StressLevel::High
        } else if score >= 30.0 {
            StressLevel::Moderate
        } else {
            StressLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low Stress",
            StressLevel::Moderate => "Moderate Stress",
            StressLevel::High => "High Stress",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            StressLevel::High => "Your physiological signs indicate elevated stress levels. Consider relaxation techniques, deep breathing, or taking a break.",
            StressLevel::Moderate => "Your stress level is moderate. This is normal during regular daily activities.",
            StressLevel::Low => "Your physiological signs indicate low stress levels. Your body is in a relaxed state.",
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of the stress heuristic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct StressAssessment {
    /// Stress bucket
    pub stress_level: StressLevel,

    /// Score on a 0-100 scale, one decimal
    pub stress_score: f64,

    /// How decisively the score falls in its bucket, 0-100, one decimal
    pub confidence: f64,

    /// Fixed explanation text for the bucket
    pub explanation: String,
}
