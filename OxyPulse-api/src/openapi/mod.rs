use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Prediction endpoints
        crate::api::handlers::prediction::predict_hemoglobin,
        crate::api::handlers::prediction::predict_fatigue,
        crate::api::handlers::prediction::predict_stress,
        crate::api::handlers::prediction::predict_health_index
    ),
    components(
        schemas(
            // Forms and responses
            crate::entities::common::ErrorResponse,
            crate::entities::prediction::HemoglobinForm,
            crate::entities::prediction::HemoglobinResponse,
            crate::entities::prediction::FatigueForm,
            crate::entities::prediction::StressForm,
            crate::entities::prediction::HealthIndexForm,

            // Domain results
            oxy_pulse_domain::entities::StressAssessment,
            oxy_pulse_domain::entities::StressLevel,
            oxy_pulse_domain::entities::HealthIndexReport,
            oxy_pulse_domain::entities::HealthCategory,
            oxy_pulse_domain::entities::VitalStatus,
            oxy_pulse_domain::entities::VitalStatuses,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "predictions", description = "Hemoglobin, fatigue, stress and health index estimates")
    ),
    info(
        title = "OxyPulse API",
        version = "0.1.0",
        description = "Health estimates from optical pulse sensor readings",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
