use oxy_pulse_data::ModelArtifact;

use super::{FatigueFeatures, FatigueModel, HemoglobinFeatures, HemoglobinModel, PredictionError, PredictorKind};
use crate::entities::FatigueLevel;

/// Highest raw regressor output accepted as a hemoglobin level, g/dL
const PLAUSIBLE_HEMOGLOBIN_MAX: f64 = 30.0;

/// Hemoglobin regressor backed by a `linear_regressor` artifact
#[derive(Debug, Clone)]
pub struct LearnedHemoglobinModel {
    artifact: ModelArtifact,
}

impl LearnedHemoglobinModel {
    /// Wrap an artifact, checking it is a regressor over four features
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictionError> {
        check_shape(&artifact, "linear_regressor", HemoglobinFeatures::LEN)?;
        Ok(Self { artifact })
    }
}

impl HemoglobinModel for LearnedHemoglobinModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, features: &HemoglobinFeatures) -> Result<f64, PredictionError> {
        let value = self.artifact.predict_value(&features.to_vector())?;
        if value <= 0.0 || value > PLAUSIBLE_HEMOGLOBIN_MAX {
            return Err(PredictionError::Implausible(value));
        }
        Ok(value)
    }
}

/// Fatigue classifier backed by a `tree_ensemble_classifier` artifact
#[derive(Debug, Clone)]
pub struct LearnedFatigueModel {
    artifact: ModelArtifact,
}

impl LearnedFatigueModel {
    /// Wrap an artifact, checking it is a classifier over six features
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictionError> {
        check_shape(&artifact, "tree_ensemble_classifier", FatigueFeatures::LEN)?;
        Ok(Self { artifact })
    }
}

impl FatigueModel for LearnedFatigueModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Learned
    }

    fn predict(&self, features: &FatigueFeatures) -> Result<FatigueLevel, PredictionError> {
        let class = self.artifact.predict_class(&features.to_vector())?;
        FatigueLevel::from_ordinal(class).ok_or(PredictionError::UnknownClass(class))
    }
}

fn check_shape(artifact: &ModelArtifact, kind: &str, features: usize) -> Result<(), PredictionError> {
    if artifact.kind_name() != kind {
        return Err(PredictionError::Incompatible(format!(
            "expected a {} artifact, found {}",
            kind,
            artifact.kind_name()
        )));
    }

    let found = artifact.feature_names().len();
    if found != features {
        return Err(PredictionError::Incompatible(format!(
            "expected {} features, artifact declares {}",
            features, found
        )));
    }

    Ok(())
}
