use super::round_to;
use crate::entities::{SensorReading, StressAssessment, StressLevel, VitalSigns};

/// Neutral midpoint every score starts from
const NEUTRAL_SCORE: f64 = 50.0;

/// Score stress from heart rate, SpO2 and the red/IR ratio.
///
/// Inputs are expected to be strictly positive; callers validate before
/// scoring. The function itself is total and never fails.
pub fn score_stress(vitals: &VitalSigns, reading: &SensorReading) -> StressAssessment {
    let score = raw_score(vitals, reading).clamp(0.0, 100.0);
    let level = StressLevel::from_score(score);

    StressAssessment {
        stress_level: level,
        stress_score: round_to(score, 1),
        confidence: round_to(confidence(score), 1),
        explanation: level.explanation().to_string(),
    }
}

/// Unclamped additive score
fn raw_score(vitals: &VitalSigns, reading: &SensorReading) -> f64 {
    NEUTRAL_SCORE + heart_rate_term(vitals.heart_rate) + oxygenation_term(vitals.spo2) + ratio_term(reading.ratio())
}

fn heart_rate_term(bpm: f64) -> f64 {
    if bpm > 100.0 {
        ((bpm - 100.0) * 1.5).min(30.0)
    } else if bpm < 60.0 {
        -((60.0 - bpm) * 0.5).min(15.0)
    } else {
        // triangular bonus peaking at 80 bpm
        -((80.0 - (bpm - 80.0).abs()) * 0.5).min(15.0)
    }
}

fn oxygenation_term(spo2: f64) -> f64 {
    if spo2 < 95.0 {
        ((95.0 - spo2) * 5.0).min(30.0)
    } else {
        -((spo2 - 95.0) * 2.0).min(10.0)
    }
}

fn ratio_term(ratio: f64) -> f64 {
    if ratio > 0.9 {
        ((ratio - 0.9) * 50.0).min(15.0)
    } else if ratio < 0.7 {
        -((0.7 - ratio) * 50.0).min(10.0)
    } else {
        0.0
    }
}

/// How decisively a clamped score sits in its bucket
fn confidence(score: f64) -> f64 {
    if score >= 70.0 {
        (70.0 + (score - 70.0) * 3.0).min(100.0)
    } else if score <= 30.0 {
        (70.0 + (30.0 - score) * 3.0).min(100.0)
    } else {
        50.0 + (score - 30.0).min(70.0 - score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assess(bpm: f64, spo2: f64, red: f64, infrared: f64) -> StressAssessment {
        score_stress(&VitalSigns::new(bpm, spo2), &SensorReading::new(red, infrared))
    }

    #[test]
    fn test_relaxed_reading_is_low_stress() {
        let result = assess(80.0, 98.0, 0.8, 1.0);
        assert_relative_eq!(result.stress_score, 29.0);
        assert_eq!(result.stress_level, StressLevel::Low);
        assert_relative_eq!(result.confidence, 73.0);
        assert_eq!(result.explanation, StressLevel::Low.explanation());
    }

    #[test]
    fn test_tachycardia_and_hypoxia_saturate() {
        let result = assess(130.0, 90.0, 1.0, 1.0);
        assert_relative_eq!(result.stress_score, 100.0);
        assert_eq!(result.stress_level, StressLevel::High);
        assert_relative_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_moderate_band_confidence() {
        // bpm 110: +15, spo2 96: -2, ratio 0.8: 0 -> 63
        let result = assess(110.0, 96.0, 80.0, 100.0);
        assert_relative_eq!(result.stress_score, 63.0);
        assert_eq!(result.stress_level, StressLevel::Moderate);
        assert_relative_eq!(result.confidence, 57.0);
    }

    #[test]
    fn test_bradycardia_term() {
        // bpm 50: -5, spo2 95: 0, ratio 0.8: 0 -> 45
        let result = assess(50.0, 95.0, 0.8, 1.0);
        assert_relative_eq!(result.stress_score, 45.0);
        assert_relative_eq!(result.confidence, 65.0);
    }

    #[test]
    fn test_low_ratio_reduces_score() {
        // bpm 55: -2.5, spo2 95: 0, ratio 0.5: -10 -> 37.5
        let result = assess(55.0, 95.0, 50.0, 100.0);
        assert_relative_eq!(result.stress_score, 37.5);
    }

    #[test]
    fn test_score_rounded_to_one_decimal() {
        // bpm 101.03: +1.545 -> 51.545, spo2 95: 0, ratio 0.8: 0
        let result = assess(101.03, 95.0, 0.8, 1.0);
        assert_relative_eq!(result.stress_score, 51.5);
    }

    #[test]
    fn test_half_tenth_scores_round_to_even() {
        // bpm 80: -15, spo2 95.375: -0.75, ratio 0.8: 0 -> 34.25
        let result = assess(80.0, 95.375, 0.8, 1.0);
        assert_eq!((result.stress_score, result.confidence), (34.2, 54.2));

        // bpm 50.5: -4.75, spo2 96: -2, ratio 0.8: 0 -> 43.25
        let result = assess(50.5, 96.0, 0.8, 1.0);
        assert_eq!((result.stress_score, result.confidence), (43.2, 63.2));
    }

    #[test]
    fn test_score_on_lower_boundary() {
        // bpm 80: -15, spo2 97.5: -5, ratio 0.8: 0 -> 30
        let result = assess(80.0, 97.5, 0.8, 1.0);
        assert_relative_eq!(result.stress_score, 30.0);
        assert_eq!(result.stress_level, StressLevel::Moderate);
        assert_relative_eq!(result.confidence, 70.0);
    }

    #[test]
    fn test_score_on_upper_boundary() {
        // bpm 110: +15, spo2 94: +5, ratio 0.8: 0 -> 70
        let result = assess(110.0, 94.0, 0.8, 1.0);
        assert_relative_eq!(result.stress_score, 70.0);
        assert_eq!(result.stress_level, StressLevel::High);
        assert_relative_eq!(result.confidence, 70.0);
    }

    #[test]
    fn test_score_and_confidence_stay_in_range() {
        for bpm in [1.0, 40.0, 59.9, 60.0, 80.0, 100.0, 100.1, 150.0, 300.0] {
            for spo2 in [1.0, 50.0, 94.9, 95.0, 97.0, 100.0] {
                for (red, infrared) in [(1.0, 1.0), (50.0, 100.0), (99.0, 100.0), (5.0, 1.0)] {
                    let result = assess(bpm, spo2, red, infrared);
                    assert!((0.0..=100.0).contains(&result.stress_score));
                    assert!((0.0..=100.0).contains(&result.confidence));
                }
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        assert_eq!(assess(93.0, 96.5, 61000.0, 72000.0), assess(93.0, 96.5, 61000.0, 72000.0));
    }
}
