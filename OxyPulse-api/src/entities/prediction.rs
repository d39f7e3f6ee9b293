use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields posted by the hemoglobin page
#[derive(Debug, Deserialize, ToSchema)]
pub struct HemoglobinForm {
    /// Red channel intensity
    #[schema(example = 50000.0)]
    pub red_value: f64,
    /// Infrared channel intensity
    #[schema(example = 80000.0)]
    pub ir_value: f64,
    /// 0 for male, 1 for female
    #[schema(example = 1.0)]
    pub gender: f64,
    /// Age in years
    #[schema(example = 70.0)]
    pub age: f64,
}

/// Hemoglobin estimate, formatted to two decimals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HemoglobinResponse {
    /// Estimated hemoglobin in g/dL
    #[schema(example = "12.44")]
    pub prediction: String,
}

/// Fields posted by the fatigue page
#[derive(Debug, Deserialize, ToSchema)]
pub struct FatigueForm {
    /// Six numbers in order: heart rate, SpO2, infrared, red, age, gender.
    /// Either one comma separated field or repeated `values` fields.
    #[schema(example = "75,98,80000,60000,30,0")]
    pub values: String,
}

/// Fields posted by the stress page. All must be positive.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StressForm {
    #[schema(example = 80.0)]
    pub bpm: f64,
    #[schema(example = 98.0)]
    pub spo2: f64,
    #[schema(example = 80000.0)]
    pub ir_value: f64,
    #[schema(example = 60000.0)]
    pub red_value: f64,
}

/// Fields posted by the health index page
#[derive(Debug, Deserialize, ToSchema)]
pub struct HealthIndexForm {
    #[schema(example = 75.0)]
    pub bpm: f64,
    #[schema(example = 97.0)]
    pub spo2: f64,
    #[schema(example = 70000.0)]
    pub ir_value: f64,
    #[schema(example = 55000.0)]
    pub red_value: f64,
    /// Self-reported stress on a 0-10 scale. Estimated from the vitals when left out.
    #[schema(example = 3.5)]
    pub stress_level: Option<f64>,
}
