use thiserror::Error;

/// Error type for model artifact operations
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file could not be read
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON or does not match the format
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// Feature vector length does not match what the model was trained on
    #[error("Feature count mismatch: expected {expected}, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    /// A tree references a node that does not exist or never reaches a leaf
    #[error("Malformed tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },

    /// The model has nothing to evaluate
    #[error("Empty model: {0}")]
    EmptyModel(String),

    /// Evaluation produced NaN or infinity
    #[error("Model produced a non-finite output")]
    NonFiniteOutput,

    /// The artifact is of a different kind than the caller expected
    #[error("Unexpected model kind: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}
