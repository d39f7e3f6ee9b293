//! Domain layer health check functionality
//! This module reports which predictors the service is running on

use std::collections::HashMap;
use async_trait::async_trait;

use crate::predictors::{ModelStatus, PredictorKind};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health service reporting on the predictors selected at start-up
#[derive(Debug, Clone)]
pub struct ModelHealthService {
    status: ModelStatus,
}

impl ModelHealthService {
    pub fn new(status: ModelStatus) -> Self {
        Self { status }
    }
}

#[async_trait]
impl HealthServiceTrait for ModelHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert("hemoglobin_model".to_string(), model_component(self.status.hemoglobin));
        components.insert("fatigue_model".to_string(), model_component(self.status.fatigue));
        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth {
            status: overall_status(&components),
            components,
        }
    }
}

/// A predictor on its heuristic fallback still answers every request, so it is degraded, not down
fn model_component(kind: PredictorKind) -> HealthComponent {
    match kind {
        PredictorKind::Learned => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        PredictorKind::Heuristic => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Learned model unavailable; serving heuristic fallback".to_string()),
        },
    }
}

/// Worst component status wins
pub fn overall_status(components: &HashMap<String, HealthComponent>) -> SystemStatus {
    if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_learned_is_healthy() {
        let service = ModelHealthService::new(ModelStatus {
            hemoglobin: PredictorKind::Learned,
            fatigue: PredictorKind::Learned,
        });

        let health = service.get_system_health().await;
        assert_eq!(health.status, SystemStatus::Healthy);
        assert!(health.components.contains_key("api"));
        assert!(health.components["hemoglobin_model"].details.is_none());
    }

    #[tokio::test]
    async fn test_heuristic_fallback_is_degraded() {
        let service = ModelHealthService::new(ModelStatus {
            hemoglobin: PredictorKind::Learned,
            fatigue: PredictorKind::Heuristic,
        });

        let health = service.get_system_health().await;
        assert_eq!(health.status, SystemStatus::Degraded);

        let fatigue = &health.components["fatigue_model"];
        assert_eq!(fatigue.status, ComponentStatus::Degraded);
        assert!(fatigue.details.as_ref().unwrap().contains("heuristic"));
    }

    #[test]
    fn test_unhealthy_component_wins() {
        let mut components = HashMap::new();
        components.insert("a".to_string(), HealthComponent { status: ComponentStatus::Degraded, details: None });
        components.insert("b".to_string(), HealthComponent { status: ComponentStatus::Unhealthy, details: None });
        assert_eq!(overall_status(&components), SystemStatus::Unhealthy);
    }
}
