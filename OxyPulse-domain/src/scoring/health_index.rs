//! Composite health index.
//!
//! Four component indices (cardio, respiratory, stress, perfusion) on a 0-100
//! scale, combined with fixed weights into one index.

use super::round_to;
use crate::entities::{
    HealthCategory, HealthIndexInput, HealthIndexReport, SensorReading, VitalSigns, VitalStatus, VitalStatuses,
};

const CARDIO_WEIGHT: f64 = 0.3;
const RESPIRATORY_WEIGHT: f64 = 0.3;
const STRESS_WEIGHT: f64 = 0.2;
const PERFUSION_WEIGHT: f64 = 0.2;

/// Compute the composite health index and its components
pub fn compute_health_index(input: &HealthIndexInput) -> HealthIndexReport {
    let stress_level = input
        .stress_level
        .unwrap_or_else(|| estimate_stress_level(&input.vitals, &input.reading));

    let cardio = cardio_index(input.vitals.heart_rate);
    let respiratory = respiratory_index(input.vitals.spo2);
    let perfusion = perfusion_index(&input.reading);
    let stress = (100.0 - stress_level * 10.0).clamp(0.0, 100.0);

    let health_index = round_to(
        cardio * CARDIO_WEIGHT + respiratory * RESPIRATORY_WEIGHT + stress * STRESS_WEIGHT + perfusion * PERFUSION_WEIGHT,
        2,
    );
    let label = HealthCategory::from_index(health_index);

    HealthIndexReport {
        health_index,
        cardio_index: round_to(cardio, 2),
        respiratory_index: round_to(respiratory, 2),
        stress_index: round_to(stress, 2),
        perfusion_index: round_to(perfusion, 2),
        stress_level: round_to(stress_level, 1),
        label,
        description: label.description().to_string(),
        statuses: vital_statuses(&input.vitals, &input.reading, stress_level),
    }
}

/// Estimate stress on a 0-10 scale from normalized vitals.
///
/// Higher heart rate, lower SpO2 and higher perfusion push it up.
pub fn estimate_stress_level(vitals: &VitalSigns, reading: &SensorReading) -> f64 {
    let bpm = normalize_bpm(vitals.heart_rate);
    let spo2 = normalize_spo2(vitals.spo2);
    let perfusion = perfusion_score(reading);

    (bpm * 0.6 + (10.0 - spo2) * 0.3 + perfusion * 0.1).clamp(0.0, 10.0)
}

// 0-10, higher = more stress
fn normalize_bpm(bpm: f64) -> f64 {
    if bpm < 60.0 {
        3.0
    } else if bpm > 100.0 {
        7.0 + (bpm - 100.0) / 20.0
    } else {
        2.0 + (bpm - 60.0) / 8.0
    }
}

// 0-10, higher = healthier
fn normalize_spo2(spo2: f64) -> f64 {
    if spo2 < 90.0 {
        (spo2 - 80.0) / 2.0
    } else if spo2 < 95.0 {
        5.0 + (spo2 - 90.0)
    } else {
        7.0 + (spo2 - 95.0) / 1.6
    }
}

// 0-10
fn perfusion_score(reading: &SensorReading) -> f64 {
    let ratio = red_to_infrared(reading);
    if ratio < 0.4 {
        3.0
    } else if ratio > 0.8 {
        8.0
    } else {
        3.0 + (ratio - 0.4) / 0.08
    }
}

// Plain red/IR; inputs are validated positive before scoring
fn red_to_infrared(reading: &SensorReading) -> f64 {
    reading.red / reading.infrared
}

fn cardio_index(bpm: f64) -> f64 {
    let index = if bpm < 50.0 {
        50.0 + (bpm - 40.0) * 2.0
    } else if bpm > 100.0 {
        80.0 - (bpm - 100.0) * 2.0
    } else if bpm <= 80.0 {
        85.0 + ((80.0 - (bpm - 65.0).abs()) / 15.0) * 15.0
    } else {
        100.0 - (bpm - 80.0)
    };
    index.clamp(0.0, 100.0)
}

fn respiratory_index(spo2: f64) -> f64 {
    let index = if spo2 < 90.0 {
        (spo2 - 80.0) * 5.0
    } else if spo2 < 95.0 {
        50.0 + (spo2 - 90.0) * 10.0
    } else {
        80.0 + (spo2 - 95.0) * 4.0
    };
    index.clamp(0.0, 100.0)
}

fn perfusion_index(reading: &SensorReading) -> f64 {
    let ratio = red_to_infrared(reading);
    let index = if ratio < 0.4 {
        ratio * 100.0
    } else if ratio > 0.8 {
        80.0 + (ratio - 0.8) * 50.0
    } else {
        40.0 + (ratio - 0.4) * 100.0
    };
    index.clamp(0.0, 100.0)
}

fn vital_statuses(vitals: &VitalSigns, reading: &SensorReading, stress_level: f64) -> VitalStatuses {
    let bpm = if vitals.heart_rate < 60.0 {
        VitalStatus::Low
    } else if vitals.heart_rate > 100.0 {
        VitalStatus::High
    } else {
        VitalStatus::Normal
    };

    let spo2 = if vitals.spo2 < 90.0 {
        VitalStatus::Critical
    } else if vitals.spo2 < 95.0 {
        VitalStatus::Low
    } else {
        VitalStatus::Normal
    };

    let infrared = band(reading.infrared, 60_000.0, 90_000.0);
    let red = band(reading.red, 45_000.0, 75_000.0);

    let stress = if stress_level < 4.0 {
        VitalStatus::Low
    } else if stress_level < 7.0 {
        VitalStatus::Moderate
    } else {
        VitalStatus::High
    };

    VitalStatuses { bpm, spo2, infrared, red, stress }
}

fn band(value: f64, low: f64, high: f64) -> VitalStatus {
    if value < low {
        VitalStatus::Low
    } else if value > high {
        VitalStatus::High
    } else {
        VitalStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(bpm: f64, spo2: f64, infrared: f64, red: f64, stress_level: Option<f64>) -> HealthIndexInput {
        HealthIndexInput {
            vitals: VitalSigns::new(bpm, spo2),
            reading: SensorReading::new(red, infrared),
            stress_level,
        }
    }

    #[test]
    fn test_reference_reading() {
        // cardio 100 (clamped), respiratory 88, stress 65, perfusion ~78.57
        let report = compute_health_index(&input(75.0, 97.0, 70000.0, 55000.0, Some(3.5)));

        assert_relative_eq!(report.cardio_index, 100.0);
        assert_relative_eq!(report.respiratory_index, 88.0);
        assert_relative_eq!(report.stress_index, 65.0);
        assert_relative_eq!(report.perfusion_index, 78.57);
        assert_relative_eq!(report.health_index, 85.11);
        assert_eq!(report.label, HealthCategory::Excellent);
        assert_eq!(report.statuses.bpm, VitalStatus::Normal);
        assert_eq!(report.statuses.stress, VitalStatus::Low);
    }

    #[test]
    fn test_estimated_stress_level() {
        // bpm 80 -> 4.5, spo2 95 -> 7, ratio 0.6 -> 5.5
        // 4.5*0.6 + 3*0.3 + 5.5*0.1 = 4.15
        let stress = estimate_stress_level(&VitalSigns::new(80.0, 95.0), &SensorReading::new(60.0, 100.0));
        assert_relative_eq!(stress, 4.15, epsilon = 1e-9);
    }

    #[test]
    fn test_stress_level_is_estimated_when_missing() {
        // bpm 88 -> 5.5, spo2 95 -> 7, ratio 0.4 -> 3
        let report = compute_health_index(&input(88.0, 95.0, 100.0, 40.0, None));
        assert_relative_eq!(report.stress_level, 4.5);
        assert_eq!(report.statuses.stress, VitalStatus::Moderate);
    }

    #[test]
    fn test_poor_vitals_need_attention() {
        let report = compute_health_index(&input(140.0, 85.0, 100000.0, 20000.0, Some(9.0)));
        assert_eq!(report.label, HealthCategory::NeedsAttention);
        assert_eq!(report.statuses.bpm, VitalStatus::High);
        assert_eq!(report.statuses.spo2, VitalStatus::Critical);
        assert_eq!(report.statuses.infrared, VitalStatus::High);
        assert_eq!(report.statuses.red, VitalStatus::Low);
        assert_eq!(report.statuses.stress, VitalStatus::High);
    }

    #[test]
    fn test_perfusion_uses_unfloored_ratio() {
        // ratio 0.3 / 0.5 = 0.6 -> 40 + 0.2 * 100
        let report = compute_health_index(&input(75.0, 97.0, 0.5, 0.3, Some(3.5)));
        assert_relative_eq!(report.perfusion_index, 60.0);

        // perfusion score 3 + 0.2 / 0.08 = 5.5 feeds the estimated stress
        let stress = estimate_stress_level(&VitalSigns::new(80.0, 95.0), &SensorReading::new(0.3, 0.5));
        assert_relative_eq!(stress, 4.15, epsilon = 1e-9);
    }

    #[test]
    fn test_components_are_bounded() {
        for bpm in [1.0, 45.0, 65.0, 90.0, 250.0] {
            for spo2 in [1.0, 85.0, 92.0, 99.0] {
                let report = compute_health_index(&input(bpm, spo2, 1.0, 10.0, None));
                for value in [
                    report.health_index,
                    report.cardio_index,
                    report.respiratory_index,
                    report.stress_index,
                    report.perfusion_index,
                ] {
                    assert!((0.0..=100.0).contains(&value), "{} out of range", value);
                }
            }
        }
    }
}
