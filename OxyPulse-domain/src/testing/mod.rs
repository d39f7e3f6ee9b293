// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

use oxy_pulse_data::ArtifactError;

use crate::entities::FatigueLevel;
use crate::predictors::{
    FatigueFeatures, FatigueModel, HemoglobinFeatures, HemoglobinModel, PredictionError, PredictorKind,
};

/// Learned-model stand-in that always answers the same hemoglobin value
#[derive(Debug, Clone, Copy)]
pub struct FixedHemoglobinModel(pub f64);

impl HemoglobinModel for FixedHemoglobinModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, _features: &HemoglobinFeatures) -> Result<f64, PredictionError> {
        Ok(self.0)
    }
}

/// Learned-model stand-in whose inference always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingHemoglobinModel;

impl HemoglobinModel for FailingHemoglobinModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, _features: &HemoglobinFeatures) -> Result<f64, PredictionError> {
        Err(PredictionError::Inference(ArtifactError::NonFiniteOutput))
    }
}

/// Learned-model stand-in that always answers the same fatigue level
#[derive(Debug, Clone, Copy)]
pub struct FixedFatigueModel(pub FatigueLevel);

impl FatigueModel for FixedFatigueModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, _features: &FatigueFeatures) -> Result<FatigueLevel, PredictionError> {
        Ok(self.0)
    }
}

/// Learned-model stand-in whose inference always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingFatigueModel;

impl FatigueModel for FailingFatigueModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, _features: &FatigueFeatures) -> Result<FatigueLevel, PredictionError> {
        Err(PredictionError::UnknownClass(9))
    }
}
