// OxyPulse Data
// This crate owns the persisted model artifacts: their on-disk format,
// loading and raw evaluation.

// Artifact formats and evaluation
pub mod artifacts;

// Loading artifacts from disk
pub mod store;

// Re-export commonly used types
pub use artifacts::{ArtifactError, ModelArtifact};
pub use store::{ModelStore, ModelStoreConfig};
