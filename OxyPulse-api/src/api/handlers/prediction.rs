use axum::{
    extract::State,
    response::Redirect,
    Json,
};
use tracing::{info, instrument, warn};

use oxy_pulse_domain::entities::{
    Demographics, Gender, HealthIndexInput, HealthIndexReport, SensorReading, StressAssessment, VitalSigns,
};
use oxy_pulse_domain::predictors::FatigueFeatures;

use crate::api::extract::{parse_number, FormError, FormFields};
use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::prediction::HemoglobinResponse;

/// Page that renders the fatigue result
pub const FATIGUE_RESULTS_PAGE: &str = "/predict3.html";

/// Shown when a fatigue value is not a number
pub const INVALID_FATIGUE_INPUT: &str = "Invalid input. Please enter numeric values.";

/// Shown when the fatigue form does not hold six values
pub const WRONG_FATIGUE_COUNT: &str = "Please provide exactly 6 values.";

/// Estimate hemoglobin from the optical sensor reading
#[utoipa::path(
    post,
    path = "/predict",
    request_body(content = crate::entities::prediction::HemoglobinForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Hemoglobin estimate in g/dL", body = HemoglobinResponse),
        (status = 400, description = "A field is not a number", body = ErrorResponse),
        (status = 415, description = "Body is not a form", body = ErrorResponse)
    ),
    tag = "predictions"
)]
#[instrument(skip(state))]
pub async fn predict_hemoglobin(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<HemoglobinResponse>, ErrorResponse> {
    info!("Hemoglobin prediction requested");

    let reading = SensorReading::new(form.number("red_value")?, form.number("ir_value")?);
    let demographics = Demographics::new(Gender::from_code(form.number("gender")?), form.number("age")?);

    let estimate = state.predictions.estimate_hemoglobin(&reading, &demographics);

    Ok(Json(HemoglobinResponse {
        prediction: estimate.formatted(),
    }))
}

/// Classify fatigue and redirect to the results page.
///
/// Errors are reported through the same `prediction` query parameter.
#[utoipa::path(
    post,
    path = "/predict_fatigue",
    request_body(content = crate::entities::prediction::FatigueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to /predict3.html with the fatigue label or an error message in `prediction`")
    ),
    tag = "predictions"
)]
#[instrument(skip(state))]
pub async fn predict_fatigue(
    State(state): State<AppState>,
    form: Result<FormFields, FormError>,
) -> Redirect {
    info!("Fatigue prediction requested");

    let message = match form {
        Ok(form) => match fatigue_features(&form) {
            Ok(features) => state.predictions.classify_fatigue(&features).label(),
            Err(message) => message,
        },
        Err(err) => {
            warn!("Fatigue form rejected: {}", err);
            INVALID_FATIGUE_INPUT
        }
    };

    Redirect::to(&results_location(message))
}

/// Collect the six fatigue values from comma separated or repeated `values` fields
pub fn fatigue_features(form: &FormFields) -> Result<FatigueFeatures, &'static str> {
    let values = form
        .get_all("values")
        .flat_map(|field| field.split(','))
        .map(|raw| parse_number("values", raw))
        .collect::<Result<Vec<f64>, FormError>>()
        .map_err(|err| {
            warn!("Fatigue values rejected: {}", err);
            INVALID_FATIGUE_INPUT
        })?;

    FatigueFeatures::from_values(&values).ok_or(WRONG_FATIGUE_COUNT)
}

/// Results page URL carrying `message` as the `prediction` parameter
pub fn results_location(message: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("prediction", message)
        .finish();
    format!("{}?{}", FATIGUE_RESULTS_PAGE, query)
}

/// Score stress from vitals and the optical reading
#[utoipa::path(
    post,
    path = "/predict_stress",
    request_body(content = crate::entities::prediction::StressForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Stress assessment", body = StressAssessment),
        (status = 400, description = "A field is missing, not a number or not positive", body = ErrorResponse),
        (status = 415, description = "Body is not a form", body = ErrorResponse)
    ),
    tag = "predictions"
)]
#[instrument(skip(state))]
pub async fn predict_stress(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<StressAssessment>, ErrorResponse> {
    info!("Stress assessment requested");

    let vitals = VitalSigns::new(form.number("bpm")?, form.number("spo2")?);
    let reading = SensorReading::new(form.number("red_value")?, form.number("ir_value")?);

    let assessment = state.predictions.assess_stress(&vitals, &reading)?;
    Ok(Json(assessment))
}

/// Composite health index from vitals, the optical reading and an optional stress level
#[utoipa::path(
    post,
    path = "/predict_health_index",
    request_body(content = crate::entities::prediction::HealthIndexForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Health index report", body = HealthIndexReport),
        (status = 400, description = "A field is missing, not a number or out of range", body = ErrorResponse),
        (status = 415, description = "Body is not a form", body = ErrorResponse)
    ),
    tag = "predictions"
)]
#[instrument(skip(state))]
pub async fn predict_health_index(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<HealthIndexReport>, ErrorResponse> {
    info!("Health index requested");

    let input = HealthIndexInput {
        vitals: VitalSigns::new(form.number("bpm")?, form.number("spo2")?),
        reading: SensorReading::new(form.number("red_value")?, form.number("ir_value")?),
        stress_level: form.optional_number("stress_level")?,
    };

    let report = state.predictions.compute_health_index(&input)?;
    Ok(Json(report))
}
