use super::{FatigueFeatures, FatigueModel, HemoglobinFeatures, HemoglobinModel, PredictionError, PredictorKind};
use crate::entities::{Demographics, FatigueLevel, Gender, SensorReading};
use crate::scoring;

/// Hemoglobin formula from the scoring engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicHemoglobinModel;

impl HeuristicHemoglobinModel {
    /// Infallible variant used directly by the fallback path
    pub fn estimate(&self, features: &HemoglobinFeatures) -> f64 {
        let reading = SensorReading::new(features.red, features.infrared);
        let demographics = Demographics::new(Gender::from_code(features.gender), features.age);
        scoring::estimate_hemoglobin(&reading, &demographics).value()
    }
}

impl HemoglobinModel for HeuristicHemoglobinModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Heuristic
    }

    fn predict(&self, features: &HemoglobinFeatures) -> Result<f64, PredictionError> {
        Ok(self.estimate(features))
    }
}

/// Fatigue thresholds from the scoring engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicFatigueModel;

impl HeuristicFatigueModel {
    pub fn classify(&self, features: &FatigueFeatures) -> FatigueLevel {
        scoring::classify_fatigue(&features.vitals())
    }
}

impl FatigueModel for HeuristicFatigueModel {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Heuristic
    }

    fn predict(&self, features: &FatigueFeatures) -> Result<FatigueLevel, PredictionError> {
        Ok(self.classify(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_hemoglobin_matches_formula() {
        let features = HemoglobinFeatures { red: 50000.0, infrared: 80000.0, gender: 1.0, age: 70.0 };
        let value = HeuristicHemoglobinModel.predict(&features).unwrap();
        assert!((value - 12.4375).abs() < 1e-9);
    }

    #[test]
    fn test_heuristic_fatigue_uses_vitals_only() {
        let features = FatigueFeatures::from_values(&[95.0, 99.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(HeuristicFatigueModel.predict(&features).unwrap(), FatigueLevel::High);
        assert_eq!(HeuristicFatigueModel.kind(), PredictorKind::Heuristic);
    }
}
