pub mod errors;
pub mod prediction;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use errors::{PredictionServiceError, NON_POSITIVE_INPUT};
pub use prediction::{create_default_prediction_service, PredictionService, PredictionServiceTrait};
