use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{
    health_check, predict_fatigue, predict_health_index, predict_hemoglobin, predict_stress,
};
use crate::api::pages::serve_pages;
use crate::api::state::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router around an already built state
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    debug!("Creating application router");

    let prediction_routes = Router::new()
        .route("/predict", post(predict_hemoglobin))
        .route("/predict_fatigue", post(predict_fatigue))
        .route("/predict_stress", post(predict_stress))
        .route("/predict_health_index", post(predict_health_index));

    debug!("Prediction routes configured");

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(prediction_routes);

    let app = serve_pages(app, static_dir).with_state(state);

    debug!("Static pages configured");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
