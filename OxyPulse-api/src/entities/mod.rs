// Public entities for the OxyPulse API
// Request forms, responses and the shared error body

// Common entities for error handling
pub mod common;

// Prediction forms and responses
pub mod prediction;
