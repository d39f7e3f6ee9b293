pub mod health;
pub mod prediction;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
pub use prediction::{predict_fatigue, predict_health_index, predict_hemoglobin, predict_stress};
