// Domain entities and value objects
pub mod assessments;
pub mod health_index;
pub mod readings;

// Re-export common types for easier imports
pub use assessments::{FatigueLevel, HemoglobinEstimate, StressAssessment, StressLevel};
pub use health_index::{HealthCategory, HealthIndexInput, HealthIndexReport, VitalStatus, VitalStatuses};
pub use readings::{Demographics, Gender, SensorReading, VitalSigns};
