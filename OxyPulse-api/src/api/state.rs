use std::sync::Arc;
use std::time::Instant;

use oxy_pulse_domain::health::{HealthServiceTrait, ModelHealthService};
use oxy_pulse_domain::services::{create_default_prediction_service, PredictionServiceTrait};
use oxy_pulse_domain::ModelStore;
use tracing::info;

/// Prediction service shared by the handlers
pub type PredictionServiceHandle = Arc<dyn PredictionServiceTrait + Send + Sync>;

/// Health service shared by the handlers
pub type HealthServiceHandle = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Everything a handler needs. Built once at start-up and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub predictions: PredictionServiceHandle,
    pub health: HealthServiceHandle,
    pub started_at: Instant,
    pub environment: String,
}

impl AppState {
    pub fn new(predictions: PredictionServiceHandle, health: HealthServiceHandle, environment: impl Into<String>) -> Self {
        Self {
            predictions,
            health,
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }

    /// Load the models from `store` and wire the services around them
    pub fn from_store(store: &ModelStore, environment: impl Into<String>) -> Self {
        let paths = store.config();
        info!(
            "Loading models: hemoglobin={}, fatigue={}",
            paths.hemoglobin_path.display(),
            paths.fatigue_path.display()
        );

        let predictions = create_default_prediction_service(store);
        let status = predictions.model_status();
        info!(
            "Predictors selected: hemoglobin={:?}, fatigue={:?}",
            status.hemoglobin, status.fatigue
        );

        Self::new(
            Arc::new(predictions),
            Arc::new(ModelHealthService::new(status)),
            environment,
        )
    }

    /// Whole seconds since the state was built
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
