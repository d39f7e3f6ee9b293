use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oxy_pulse_domain::services::PredictionServiceError;

use crate::api::extract::FormError;

/// Error body returned by the JSON endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<FormError> for ErrorResponse {
    fn from(err: FormError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<PredictionServiceError> for ErrorResponse {
    fn from(err: PredictionServiceError) -> Self {
        Self::new(err.to_string())
    }
}
