use crate::entities::{Demographics, Gender, HemoglobinEstimate, SensorReading};

/// Hemoglobin baseline before any adjustment, g/dL
const BASELINE: f64 = 14.0;

/// Estimate hemoglobin from the red/IR ratio and demographics.
///
/// `14.0 - ratio * 0.1`, minus 1.0 for females, minus 1.0 for children under 12
/// or 0.5 for adults over 65, clamped to the reportable range.
pub fn estimate_hemoglobin(reading: &SensorReading, demographics: &Demographics) -> HemoglobinEstimate {
    let base = BASELINE - reading.ratio() * 0.1;

    let gender_factor = match demographics.gender {
        Gender::Female => -1.0,
        Gender::Male => 0.0,
    };

    let age_factor = if demographics.age < 12.0 {
        -1.0
    } else if demographics.age > 65.0 {
        -0.5
    } else {
        0.0
    };

    HemoglobinEstimate::new(base + gender_factor + age_factor)
}
