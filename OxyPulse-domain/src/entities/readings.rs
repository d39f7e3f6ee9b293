use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Raw optical sensor intensities from the pulse oximeter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SensorReading {
    /// Red-light intensity
    pub red: f64,

    /// Infrared intensity
    pub infrared: f64,
}

impl SensorReading {
    pub fn new(red: f64, infrared: f64) -> Self {
        Self { red, infrared }
    }

    /// Red/IR ratio. Infrared is floored at 1 so a dark IR channel never divides by zero.
    pub fn ratio(&self) -> f64 {
        self.red / self.infrared.max(1.0)
    }
}

/// Biological sex as encoded by the sensor front-end (0 = male, 1 = female)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Decode the numeric form value. Only an exact 1 means female.
    pub fn from_code(code: f64) -> Self {
        if code == 1.0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Numeric code used in model feature vectors
    pub fn code(&self) -> f64 {
        match self {
            Gender::Male => 0.0,
            Gender::Female => 1.0,
        }
    }
}

/// Demographic inputs that shift hemoglobin baselines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Demographics {
    pub gender: Gender,

    /// Age in years
    pub age: f64,
}

impl Demographics {
    pub fn new(gender: Gender, age: f64) -> Self {
        Self { gender, age }
    }
}

/// Heart rate and oxygen saturation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VitalSigns {
    /// Beats per minute
    pub heart_rate: f64,

    /// Blood oxygen saturation, percent
    pub spo2: f64,
}

impl VitalSigns {
    pub fn new(heart_rate: f64, spo2: f64) -> Self {
        Self { heart_rate, spo2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_infrared() {
        assert_eq!(SensorReading::new(5.0, 0.0).ratio(), 5.0);
        assert_eq!(SensorReading::new(5.0, 0.5).ratio(), 5.0);
        assert_eq!(SensorReading::new(5.0, 10.0).ratio(), 0.5);
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code(1.0), Gender::Female);
        assert_eq!(Gender::from_code(0.0), Gender::Male);
        assert_eq!(Gender::from_code(2.0), Gender::Male);
        assert_eq!(Gender::Female.code(), 1.0);
    }
}
