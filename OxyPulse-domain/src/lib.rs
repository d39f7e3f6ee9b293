// OxyPulse Domain
// This crate contains the business logic for the OxyPulse health estimation API

// Domain entities
pub mod entities;

// Heuristic scoring engine
pub mod scoring;

// Learned and heuristic predictors
pub mod predictors;

// Services that implement business logic
pub mod services;

// Health checks and system status
pub mod health;

// Re-export the model store from oxy_pulse_data for convenience
pub use oxy_pulse_data::{ModelStore, ModelStoreConfig};

// Testing utilities - only available in tests or with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
