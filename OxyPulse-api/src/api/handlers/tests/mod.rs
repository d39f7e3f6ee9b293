
use std::sync::Arc;

use oxy_pulse_domain::entities::FatigueLevel;
use oxy_pulse_domain::health::ModelHealthService;
use oxy_pulse_domain::predictors::ModelSet;
use oxy_pulse_domain::services::PredictionService;
use oxy_pulse_domain::testing::{FixedFatigueModel, FixedHemoglobinModel};

use crate::api::extract::FormFields;
use crate::api::state::AppState;

/// State backed by the given predictors
pub(crate) fn state_with(models: ModelSet) -> AppState {
    let status = models.status();
    AppState::new(
        Arc::new(PredictionService::new(models)),
        Arc::new(ModelHealthService::new(status)),
        "test",
    )
}

/// State whose learned models answer fixed values
pub(crate) fn fixed_state(hemoglobin: f64, fatigue: FatigueLevel) -> AppState {
    state_with(ModelSet {
        hemoglobin: Arc::new(FixedHemoglobinModel(hemoglobin)),
        fatigue: Arc::new(FixedFatigueModel(fatigue)),
    })
}

pub(crate) fn form(pairs: &[(&str, &str)]) -> FormFields {
    FormFields::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
}
