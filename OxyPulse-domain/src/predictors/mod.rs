//! Predictor abstraction over learned models and the heuristic fallbacks.
//!
//! Each prediction target has a trait with two implementations: a learned
//! model wrapping a persisted artifact, and a heuristic wrapping the scoring
//! engine. Which one serves requests is decided once, at start-up, by
//! [`selection`].

use serde::Serialize;
use thiserror::Error;

use oxy_pulse_data::ArtifactError;

use crate::entities::{Demographics, FatigueLevel, SensorReading, VitalSigns};

pub mod heuristic;
pub mod learned;
pub mod selection;

pub use heuristic::{HeuristicFatigueModel, HeuristicHemoglobinModel};
pub use learned::{LearnedFatigueModel, LearnedHemoglobinModel};
pub use selection::{select_fatigue_model, select_hemoglobin_model, ModelSet, ModelStatus};

/// Which implementation backs a predictor
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PredictorKind {
    /// A trained model loaded from an artifact
    Learned,
    /// The deterministic formula from the scoring engine
    Heuristic,
}

/// Prediction errors
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The underlying artifact failed to evaluate
    #[error("Model inference failed: {0}")]
    Inference(#[from] ArtifactError),

    /// The classifier voted for a label outside the fatigue mapping
    #[error("Model returned unknown fatigue class {0}")]
    UnknownClass(u8),

    /// The regressor produced a value that cannot be a hemoglobin level
    #[error("Model returned implausible value {0}")]
    Implausible(f64),

    /// The artifact does not have the shape this predictor needs
    #[error("Incompatible model artifact: {0}")]
    Incompatible(String),
}

/// Hemoglobin feature vector: `[red, infrared, gender, age]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemoglobinFeatures {
    pub red: f64,
    pub infrared: f64,
    pub gender: f64,
    pub age: f64,
}

impl HemoglobinFeatures {
    pub const LEN: usize = 4;

    pub fn new(reading: &SensorReading, demographics: &Demographics) -> Self {
        Self {
            red: reading.red,
            infrared: reading.infrared,
            gender: demographics.gender.code(),
            age: demographics.age,
        }
    }

    pub fn to_vector(&self) -> [f64; Self::LEN] {
        [self.red, self.infrared, self.gender, self.age]
    }
}

/// Fatigue feature vector: `[heart_rate, spo2, infrared, red, age, gender]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FatigueFeatures {
    pub heart_rate: f64,
    pub spo2: f64,
    pub infrared: f64,
    pub red: f64,
    pub age: f64,
    pub gender: f64,
}

impl FatigueFeatures {
    pub const LEN: usize = 6;

    /// Build from raw values in feature order. Returns `None` unless exactly six are given.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [heart_rate, spo2, infrared, red, age, gender] => Some(Self {
                heart_rate,
                spo2,
                infrared,
                red,
                age,
                gender,
            }),
            _ => None,
        }
    }

    pub fn vitals(&self) -> VitalSigns {
        VitalSigns::new(self.heart_rate, self.spo2)
    }

    pub fn to_vector(&self) -> [f64; Self::LEN] {
        [self.heart_rate, self.spo2, self.infrared, self.red, self.age, self.gender]
    }
}

/// Hemoglobin regressor contract
pub trait HemoglobinModel: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> PredictorKind;

    /// Raw estimate in g/dL, before clamping
    fn predict(&self, features: &HemoglobinFeatures) -> Result<f64, PredictionError>;
}

/// Fatigue classifier contract
pub trait FatigueModel: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> PredictorKind;

    fn predict(&self, features: &FatigueFeatures) -> Result<FatigueLevel, PredictionError>;
}
