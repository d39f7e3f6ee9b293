use thiserror::Error;

/// Message returned when any stress or health-index input is not a positive number
pub const NON_POSITIVE_INPUT: &str = "All values must be positive numbers.";

/// Prediction service errors
#[derive(Debug, Error, PartialEq)]
pub enum PredictionServiceError {
    /// Input failed validation before scoring
    #[error("{0}")]
    InvalidInput(String),
}
