use tracing::{debug, warn};

use oxy_pulse_data::ModelStore;

use super::errors::{PredictionServiceError, NON_POSITIVE_INPUT};
use crate::entities::{
    Demographics, FatigueLevel, HealthIndexInput, HealthIndexReport, HemoglobinEstimate, SensorReading,
    StressAssessment, VitalSigns,
};
use crate::predictors::{
    FatigueFeatures, HemoglobinFeatures, HeuristicFatigueModel, HeuristicHemoglobinModel, ModelSet, ModelStatus,
    PredictorKind,
};
use crate::scoring;

/// Trait for prediction service operations
pub trait PredictionServiceTrait: Send + Sync + std::fmt::Debug {
    /// Estimate hemoglobin. Falls back to the heuristic if the model fails, so it never errors.
    fn estimate_hemoglobin(&self, reading: &SensorReading, demographics: &Demographics) -> HemoglobinEstimate;

    /// Classify fatigue. Falls back to the heuristic if the model fails, so it never errors.
    fn classify_fatigue(&self, features: &FatigueFeatures) -> FatigueLevel;

    /// Score stress after checking every input is a positive number
    fn assess_stress(
        &self,
        vitals: &VitalSigns,
        reading: &SensorReading,
    ) -> Result<StressAssessment, PredictionServiceError>;

    /// Compute the composite health index after validating inputs
    fn compute_health_index(&self, input: &HealthIndexInput) -> Result<HealthIndexReport, PredictionServiceError>;

    /// Which implementation each predictor runs on
    fn model_status(&self) -> ModelStatus;
}

/// Prediction service backed by the models selected at start-up
#[derive(Debug, Clone)]
pub struct PredictionService {
    models: ModelSet,
}

impl PredictionService {
    /// Create a new prediction service
    pub fn new(models: ModelSet) -> Self {
        Self { models }
    }

    fn require_positive(values: &[f64]) -> Result<(), PredictionServiceError> {
        if values.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(PredictionServiceError::InvalidInput(NON_POSITIVE_INPUT.to_string()))
        }
    }
}

impl PredictionServiceTrait for PredictionService {
    fn estimate_hemoglobin(&self, reading: &SensorReading, demographics: &Demographics) -> HemoglobinEstimate {
        let features = HemoglobinFeatures::new(reading, demographics);

        let raw = match self.models.hemoglobin.predict(&features) {
            Ok(value) => value,
            Err(e) => {
                warn!("Hemoglobin prediction failed, using heuristic: {}", e);
                HeuristicHemoglobinModel.estimate(&features)
            }
        };

        debug!("Hemoglobin estimate {:.2} ({:?})", raw, self.models.hemoglobin.kind());
        HemoglobinEstimate::new(raw)
    }

    fn classify_fatigue(&self, features: &FatigueFeatures) -> FatigueLevel {
        match self.models.fatigue.predict(features) {
            Ok(level) => level,
            Err(e) => {
                warn!("Fatigue prediction failed, using heuristic: {}", e);
                HeuristicFatigueModel.classify(features)
            }
        }
    }

    fn assess_stress(
        &self,
        vitals: &VitalSigns,
        reading: &SensorReading,
    ) -> Result<StressAssessment, PredictionServiceError> {
        Self::require_positive(&[vitals.heart_rate, vitals.spo2, reading.infrared, reading.red])?;
        Ok(scoring::score_stress(vitals, reading))
    }

    fn compute_health_index(&self, input: &HealthIndexInput) -> Result<HealthIndexReport, PredictionServiceError> {
        Self::require_positive(&[
            input.vitals.heart_rate,
            input.vitals.spo2,
            input.reading.infrared,
            input.reading.red,
        ])?;

        if let Some(level) = input.stress_level {
            if !(0.0..=10.0).contains(&level) {
                return Err(PredictionServiceError::InvalidInput(
                    "Stress level must be between 0 and 10.".to_string(),
                ));
            }
        }

        Ok(scoring::compute_health_index(input))
    }

    fn model_status(&self) -> ModelStatus {
        self.models.status()
    }
}

/// Factory function: load artifacts from the store and build the service
pub fn create_default_prediction_service(store: &ModelStore) -> PredictionService {
    let service = PredictionService::new(ModelSet::load(store));
    let status = service.model_status();
    if status.hemoglobin == PredictorKind::Heuristic || status.fatigue == PredictorKind::Heuristic {
        debug!("Prediction service running with heuristic fallbacks: {:?}", status);
    }
    service
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Gender, StressLevel};
    use crate::testing::{FailingFatigueModel, FailingHemoglobinModel, FixedFatigueModel, FixedHemoglobinModel};
    use std::sync::Arc;

    fn service_with(models: ModelSet) -> PredictionService {
        PredictionService::new(models)
    }

    fn female_elder() -> (SensorReading, Demographics) {
        (SensorReading::new(50000.0, 80000.0), Demographics::new(Gender::Female, 70.0))
    }

    #[test]
    fn test_heuristic_hemoglobin() {
        let service = service_with(ModelSet::heuristic());
        let (reading, demographics) = female_elder();
        assert_eq!(service.estimate_hemoglobin(&reading, &demographics).formatted(), "12.44");
    }

    #[test]
    fn test_learned_hemoglobin_is_used_when_available() {
        let service = service_with(ModelSet {
            hemoglobin: Arc::new(FixedHemoglobinModel(13.25)),
            fatigue: Arc::new(HeuristicFatigueModel),
        });
        let (reading, demographics) = female_elder();
        assert_eq!(service.estimate_hemoglobin(&reading, &demographics).value(), 13.25);
    }

    #[test]
    fn test_learned_hemoglobin_is_clamped() {
        let service = service_with(ModelSet {
            hemoglobin: Arc::new(FixedHemoglobinModel(25.0)),
            fatigue: Arc::new(HeuristicFatigueModel),
        });
        let (reading, demographics) = female_elder();
        assert_eq!(service.estimate_hemoglobin(&reading, &demographics).value(), 18.0);
    }

    #[test]
    fn test_failing_hemoglobin_model_falls_back() {
        let service = service_with(ModelSet {
            hemoglobin: Arc::new(FailingHemoglobinModel),
            fatigue: Arc::new(HeuristicFatigueModel),
        });
        let (reading, demographics) = female_elder();
        assert_eq!(service.estimate_hemoglobin(&reading, &demographics).formatted(), "12.44");
        assert_eq!(service.model_status().hemoglobin, PredictorKind::Learned);
    }

    #[test]
    fn test_fatigue_uses_model_then_falls_back() {
        let features = FatigueFeatures::from_values(&[95.0, 99.0, 1.0, 1.0, 30.0, 0.0]).unwrap();

        let learned = service_with(ModelSet {
            hemoglobin: Arc::new(HeuristicHemoglobinModel),
            fatigue: Arc::new(FixedFatigueModel(FatigueLevel::Low)),
        });
        assert_eq!(learned.classify_fatigue(&features), FatigueLevel::Low);

        let failing = service_with(ModelSet {
            hemoglobin: Arc::new(HeuristicHemoglobinModel),
            fatigue: Arc::new(FailingFatigueModel),
        });
        assert_eq!(failing.classify_fatigue(&features), FatigueLevel::High);
    }

    #[test]
    fn test_stress_rejects_non_positive_inputs() {
        let service = service_with(ModelSet::heuristic());
        let err = service
            .assess_stress(&VitalSigns::new(0.0, 98.0), &SensorReading::new(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err.to_string(), NON_POSITIVE_INPUT);

        assert!(service
            .assess_stress(&VitalSigns::new(80.0, 98.0), &SensorReading::new(-1.0, 1.0))
            .is_err());
        assert!(service
            .assess_stress(&VitalSigns::new(f64::NAN, 98.0), &SensorReading::new(1.0, 1.0))
            .is_err());
    }

    #[test]
    fn test_stress_assessment() {
        let service = service_with(ModelSet::heuristic());
        let result = service
            .assess_stress(&VitalSigns::new(130.0, 90.0), &SensorReading::new(1.0, 1.0))
            .unwrap();
        assert_eq!(result.stress_level, StressLevel::High);
        assert_eq!(result.stress_score, 100.0);
    }

    #[test]
    fn test_health_index_validation() {
        let service = service_with(ModelSet::heuristic());
        let mut input = HealthIndexInput {
            vitals: VitalSigns::new(75.0, 97.0),
            reading: SensorReading::new(55000.0, 70000.0),
            stress_level: Some(11.0),
        };
        assert!(service.compute_health_index(&input).is_err());

        input.stress_level = Some(3.5);
        assert_eq!(service.compute_health_index(&input).unwrap().health_index, 85.11);

        input.vitals.spo2 = 0.0;
        assert_eq!(
            service.compute_health_index(&input).unwrap_err(),
            PredictionServiceError::InvalidInput(NON_POSITIVE_INPUT.to_string())
        );
    }
}
