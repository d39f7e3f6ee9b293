use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::readings::{SensorReading, VitalSigns};

/// Inputs to the composite health index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthIndexInput {
    pub vitals: VitalSigns,
    pub reading: SensorReading,

    /// Stress level on a 0-10 scale. Estimated from the vitals when absent.
    pub stress_level: Option<f64>,
}

/// Overall health category derived from the index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum HealthCategory {
    Excellent,
    Good,
    Moderate,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl HealthCategory {
    /// `>= 80` excellent, `>= 60` good, `>= 40` moderate, otherwise needs attention
    pub fn from_index(index: f64) -> Self {
        if index >= 80.0 {
            HealthCategory::Excellent
        } else if index >= 60.0 {
            HealthCategory::Good
        } else if index >= 40.0 {
            HealthCategory::Moderate
        } else {
            HealthCategory::NeedsAttention
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "Your vital signs suggest excellent health. Continue your healthy habits.",
            HealthCategory::Good => "Your overall health metrics look good. Consider small improvements to optimize further.",
            HealthCategory::Moderate => "Your health metrics show some areas for improvement. Focus on managing stress and optimizing your vital signs.",
            HealthCategory::NeedsAttention => "Your health metrics indicate areas that need attention. Consider consulting with a healthcare professional.",
        }
    }
}

/// Coarse status flag for a single vital
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum VitalStatus {
    Low,
    Normal,
    Moderate,
    High,
    Critical,
}

/// Status flags for every input of the health index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VitalStatuses {
    pub bpm: VitalStatus,
    pub spo2: VitalStatus,
    pub infrared: VitalStatus,
    pub red: VitalStatus,
    pub stress: VitalStatus,
}

/// Composite health index with its component scores.
///
/// Component indices are on a 0-100 scale where higher is better.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthIndexReport {
    /// Weighted composite, two decimals
    pub health_index: f64,
    pub cardio_index: f64,
    pub respiratory_index: f64,
    pub stress_index: f64,
    pub perfusion_index: f64,

    /// Stress level used for the stress component, 0-10
    pub stress_level: f64,

    pub label: HealthCategory,
    pub description: String,
    pub statuses: VitalStatuses,
}
