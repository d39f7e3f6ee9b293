//! Loading of model artifacts from disk.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::artifacts::{ArtifactError, ModelArtifact};

/// Default location of the hemoglobin regressor
pub const DEFAULT_HEMOGLOBIN_MODEL_PATH: &str = "models/hemoglobin.json";

/// Default location of the fatigue classifier
pub const DEFAULT_FATIGUE_MODEL_PATH: &str = "models/fatigue.json";

/// Where the model artifacts live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStoreConfig {
    /// Path to the hemoglobin regressor artifact
    pub hemoglobin_path: PathBuf,
    /// Path to the fatigue classifier artifact
    pub fatigue_path: PathBuf,
}

impl Default for ModelStoreConfig {
    fn default() -> Self {
        Self {
            hemoglobin_path: PathBuf::from(DEFAULT_HEMOGLOBIN_MODEL_PATH),
            fatigue_path: PathBuf::from(DEFAULT_FATIGUE_MODEL_PATH),
        }
    }
}

/// Read-only access to the configured model artifacts
#[derive(Debug, Clone)]
pub struct ModelStore {
    config: ModelStoreConfig,
}

impl ModelStore {
    pub fn new(config: ModelStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelStoreConfig {
        &self.config
    }

    /// Load the hemoglobin regressor artifact
    pub fn load_hemoglobin(&self) -> Result<ModelArtifact, ArtifactError> {
        load_artifact(&self.config.hemoglobin_path)
    }

    /// Load the fatigue classifier artifact
    pub fn load_fatigue(&self) -> Result<ModelArtifact, ArtifactError> {
        load_artifact(&self.config.fatigue_path)
    }
}

/// Read, parse and validate an artifact file
pub fn load_artifact(path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let artifact = parse_artifact(&contents)?;
    info!("Loaded {} artifact from {}", artifact.kind_name(), path.display());
    Ok(artifact)
}

/// Parse and validate an artifact from its JSON text
pub fn parse_artifact(json: &str) -> Result<ModelArtifact, ArtifactError> {
    let artifact: ModelArtifact = serde_json::from_str(json)?;
    artifact.validate()?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("oxypulse-artifact-{}.json", Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_artifact_from_file() {
        let path = write_temp(
            r#"{"kind": "linear_regressor", "feature_names": ["a"], "coefficients": [2.0], "intercept": 1.0}"#,
        );

        let artifact = load_artifact(&path).unwrap();
        assert_eq!(artifact.predict_value(&[3.0]).unwrap(), 7.0);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("oxypulse-missing-{}.json", Uuid::new_v4()));
        let err = load_artifact(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
        assert!(err.to_string().contains("oxypulse-missing"));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = parse_artifact("not a model").unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }

    #[test]
    fn test_invalid_artifact_is_rejected_at_load() {
        let err = parse_artifact(
            r#"{"kind": "tree_ensemble_classifier", "feature_names": ["a"], "classes": [0], "trees": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyModel(_)));
    }

    #[test]
    fn test_store_uses_configured_paths() {
        let path = write_temp(
            r#"{"kind": "tree_ensemble_classifier", "feature_names": ["a"], "classes": [1], "trees": [[{"leaf": {"class": 0}}]]}"#,
        );
        let store = ModelStore::new(ModelStoreConfig {
            hemoglobin_path: PathBuf::from("/nonexistent/hemoglobin.json"),
            fatigue_path: path.clone(),
        });

        assert!(store.load_hemoglobin().is_err());
        assert_eq!(store.load_fatigue().unwrap().predict_class(&[0.0]).unwrap(), 1);

        std::fs::remove_file(path).ok();
    }
}
