use serde::{Deserialize, Serialize};

use super::errors::ArtifactError;

/// Ordinary linear regressor: `intercept + Σ coefficient · feature`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearRegressor {
    /// Names of the input features, in the order they are expected
    pub feature_names: Vec<String>,

    /// One coefficient per feature
    pub coefficients: Vec<f64>,

    /// Constant term
    pub intercept: f64,
}

impl LinearRegressor {
    /// Check that the regressor is internally consistent
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.coefficients.is_empty() {
            return Err(ArtifactError::EmptyModel(
                "linear regressor has no coefficients".to_string(),
            ));
        }

        if self.coefficients.len() != self.feature_names.len() {
            return Err(ArtifactError::FeatureMismatch {
                expected: self.feature_names.len(),
                actual: self.coefficients.len(),
            });
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::NonFiniteOutput);
        }

        Ok(())
    }

    /// Evaluate the regressor on a feature vector
    pub fn predict(&self, features: &[f64]) -> Result<f64, ArtifactError> {
        if features.len() != self.coefficients.len() {
            return Err(ArtifactError::FeatureMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let value = self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (coefficient, feature)| acc + coefficient * feature);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ArtifactError::NonFiniteOutput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn regressor() -> LinearRegressor {
        LinearRegressor {
            feature_names: vec!["red".into(), "ir".into()],
            coefficients: vec![0.5, -0.25],
            intercept: 10.0,
        }
    }

    #[test]
    fn test_predict_weighted_sum() {
        let value = regressor().predict(&[4.0, 8.0]).unwrap();
        assert_relative_eq!(value, 10.0 + 2.0 - 2.0);
    }

    #[test]
    fn test_predict_rejects_wrong_feature_count() {
        let err = regressor().predict(&[1.0]).unwrap_err();
        assert!(matches!(err, ArtifactError::FeatureMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_predict_rejects_non_finite_output() {
        let err = regressor().predict(&[f64::INFINITY, 0.0]).unwrap_err();
        assert!(matches!(err, ArtifactError::NonFiniteOutput));
    }

    #[test]
    fn test_validate_catches_mismatched_names() {
        let mut model = regressor();
        model.feature_names.push("age".into());
        assert!(model.validate().is_err());
    }
}
