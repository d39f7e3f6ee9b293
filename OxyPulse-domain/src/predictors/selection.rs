use std::sync::Arc;
use serde::Serialize;
use tracing::{info, warn};

use oxy_pulse_data::{ArtifactError, ModelArtifact, ModelStore};

use super::{
    FatigueFeatures, FatigueModel, HemoglobinFeatures, HemoglobinModel, HeuristicFatigueModel,
    HeuristicHemoglobinModel, LearnedFatigueModel, LearnedHemoglobinModel, PredictionError, PredictorKind,
};

/// Sanity-check input for a freshly loaded hemoglobin model
pub const HEMOGLOBIN_PROBE: HemoglobinFeatures = HemoglobinFeatures {
    red: 100_000.0,
    infrared: 80_000.0,
    gender: 0.0,
    age: 30.0,
};

/// Sanity-check input for a freshly loaded fatigue model
pub const FATIGUE_PROBE: FatigueFeatures = FatigueFeatures {
    heart_rate: 75.0,
    spo2: 98.0,
    infrared: 80_000.0,
    red: 60_000.0,
    age: 30.0,
    gender: 0.0,
};

/// Which implementation each predictor runs on
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelStatus {
    pub hemoglobin: PredictorKind,
    pub fatigue: PredictorKind,
}

/// The predictors chosen at start-up. Immutable once built.
#[derive(Debug, Clone)]
pub struct ModelSet {
    pub hemoglobin: Arc<dyn HemoglobinModel>,
    pub fatigue: Arc<dyn FatigueModel>,
}

impl ModelSet {
    /// Load both artifacts from the store and select a predictor for each
    pub fn load(store: &ModelStore) -> Self {
        Self {
            hemoglobin: select_hemoglobin_model(store.load_hemoglobin()),
            fatigue: select_fatigue_model(store.load_fatigue()),
        }
    }

    /// Heuristics only, no artifacts involved
    pub fn heuristic() -> Self {
        Self {
            hemoglobin: Arc::new(HeuristicHemoglobinModel),
            fatigue: Arc::new(HeuristicFatigueModel),
        }
    }

    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            hemoglobin: self.hemoglobin.kind(),
            fatigue: self.fatigue.kind(),
        }
    }
}

/// Use the learned hemoglobin model if it loaded and answers the probe, else the heuristic
pub fn select_hemoglobin_model(loaded: Result<ModelArtifact, ArtifactError>) -> Arc<dyn HemoglobinModel> {
    let candidate = loaded
        .map_err(PredictionError::from)
        .and_then(LearnedHemoglobinModel::from_artifact)
        .and_then(|model| model.predict(&HEMOGLOBIN_PROBE).map(|probe| (model, probe)));

    match candidate {
        Ok((model, probe)) => {
            info!("Hemoglobin model loaded (probe prediction {:.2} g/dL)", probe);
            Arc::new(model)
        }
        Err(e) => {
            warn!("Hemoglobin model unavailable, using heuristic fallback: {}", e);
            Arc::new(HeuristicHemoglobinModel)
        }
    }
}

/// Use the learned fatigue model if it loaded and answers the probe, else the heuristic
pub fn select_fatigue_model(loaded: Result<ModelArtifact, ArtifactError>) -> Arc<dyn FatigueModel> {
    let candidate = loaded
        .map_err(PredictionError::from)
        .and_then(LearnedFatigueModel::from_artifact)
        .and_then(|model| model.predict(&FATIGUE_PROBE).map(|probe| (model, probe)));

    match candidate {
        Ok((model, probe)) => {
            info!("Fatigue model loaded (probe prediction {})", probe);
            Arc::new(model)
        }
        Err(e) => {
            warn!("Fatigue model unavailable, using heuristic fallback: {}", e);
            Arc::new(HeuristicFatigueModel)
        }
    }
}
