use crate::entities::{FatigueLevel, VitalSigns};

/// Classify fatigue from heart rate and SpO2.
///
/// High when heart rate is above 90 or SpO2 below 95, moderate when heart rate
/// is above 80 or SpO2 below 97, low otherwise.
pub fn classify_fatigue(vitals: &VitalSigns) -> FatigueLevel {
    if vitals.heart_rate > 90.0 || vitals.spo2 < 95.0 {
        FatigueLevel::High
    } else if vitals.heart_rate > 80.0 || vitals.spo2 < 97.0 {
        FatigueLevel::Moderate
    } else {
        FatigueLevel::Low
    }
}
