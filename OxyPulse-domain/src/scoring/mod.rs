//! Heuristic scoring engine.
//!
//! Pure, deterministic functions mapping sensor readings and vitals to health
//! estimates. They are used directly (stress, health index) and as the
//! fallback when a learned model is unavailable (hemoglobin, fatigue).

pub mod fatigue;
pub mod health_index;
pub mod hemoglobin;
pub mod stress;

pub use fatigue::classify_fatigue;
pub use health_index::{compute_health_index, estimate_stress_level};
pub use hemoglobin::estimate_hemoglobin;
pub use stress::score_stress;

/// Round to a fixed number of decimal places.
///
/// Rounds the exact decimal value of `value`, with ties going to the even
/// digit, so 34.25 becomes 34.2 and 0.15 (stored just below) becomes 0.1.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
