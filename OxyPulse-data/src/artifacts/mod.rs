//! Persisted model artifacts.
//!
//! Artifacts are JSON documents tagged with a `kind` field. Two kinds exist:
//! a linear regressor (used for hemoglobin) and a tree-ensemble classifier
//! (used for fatigue).

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod forest;
pub mod linear;

pub use errors::ArtifactError;
pub use forest::{DecisionTree, Node, TreeEnsembleClassifier};
pub use linear::LinearRegressor;

/// A model artifact as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Continuous output
    LinearRegressor(LinearRegressor),
    /// Class label output
    TreeEnsembleClassifier(TreeEnsembleClassifier),
}

impl ModelArtifact {
    /// Short name of the artifact kind, matching its `kind` tag
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModelArtifact::LinearRegressor(_) => "linear_regressor",
            ModelArtifact::TreeEnsembleClassifier(_) => "tree_ensemble_classifier",
        }
    }

    /// Names of the features this artifact expects
    pub fn feature_names(&self) -> &[String] {
        match self {
            ModelArtifact::LinearRegressor(model) => &model.feature_names,
            ModelArtifact::TreeEnsembleClassifier(model) => &model.feature_names,
        }
    }

    /// Check the artifact for structural problems that would make every prediction fail
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ModelArtifact::LinearRegressor(model) => model.validate(),
            ModelArtifact::TreeEnsembleClassifier(model) => model.validate(),
        }
    }

    /// Evaluate as a regressor
    pub fn predict_value(&self, features: &[f64]) -> Result<f64, ArtifactError> {
        match self {
            ModelArtifact::LinearRegressor(model) => model.predict(features),
            other => Err(ArtifactError::UnexpectedKind {
                expected: "linear_regressor",
                found: other.kind_name(),
            }),
        }
    }

    /// Evaluate as a classifier
    pub fn predict_class(&self, features: &[f64]) -> Result<u8, ArtifactError> {
        match self {
            ModelArtifact::TreeEnsembleClassifier(model) => model.predict_class(features),
            other => Err(ArtifactError::UnexpectedKind {
                expected: "tree_ensemble_classifier",
                found: other.kind_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_linear_regressor() {
        let json = r#"{
            "kind": "linear_regressor",
            "feature_names": ["red", "ir", "gender", "age"],
            "coefficients": [0.0, 0.0, -1.0, 0.0],
            "intercept": 14.0
        }"#;

        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.kind_name(), "linear_regressor");
        assert_eq!(artifact.feature_names().len(), 4);
        assert_eq!(artifact.predict_value(&[1.0, 1.0, 1.0, 30.0]).unwrap(), 13.0);
    }

    #[test]
    fn test_deserialize_tree_ensemble() {
        let json = r#"{
            "kind": "tree_ensemble_classifier",
            "feature_names": ["hr"],
            "classes": [0, 2],
            "trees": [[
                {"split": {"feature": 0, "threshold": 90.0, "left": 1, "right": 2}},
                {"leaf": {"class": 0}},
                {"leaf": {"class": 1}}
            ]]
        }"#;

        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(artifact.validate().is_ok());
        assert_eq!(artifact.predict_class(&[120.0]).unwrap(), 2);
    }

    #[test]
    fn test_wrong_kind_is_reported() {
        let artifact = ModelArtifact::LinearRegressor(LinearRegressor {
            feature_names: vec!["x".into()],
            coefficients: vec![1.0],
            intercept: 0.0,
        });

        let err = artifact.predict_class(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::UnexpectedKind { expected: "tree_ensemble_classifier", found: "linear_regressor" }
        ));
    }
}
