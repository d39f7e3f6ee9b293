//! Browser form extraction.
//!
//! The pages post either `application/x-www-form-urlencoded` bodies or
//! `multipart/form-data` built from `FormData`. Both end up as the same
//! ordered list of text fields.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::entities::common::ErrorResponse;

/// Errors raised while reading form input
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// Body is neither urlencoded nor multipart
    #[error("Unsupported content type '{0}'. Submit the form as urlencoded or multipart data.")]
    UnsupportedContentType(String),

    /// Body could not be read
    #[error("Malformed form data: {0}")]
    Malformed(String),

    /// A field that should hold a number does not
    #[error("Invalid value for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = match self {
            FormError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Text fields of a submitted form, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Parse an urlencoded body
    pub fn from_urlencoded(body: &[u8]) -> Self {
        Self {
            fields: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted under `name`
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Numeric field; an absent field reads as 0
    pub fn number(&self, name: &str) -> Result<f64, FormError> {
        Ok(self.optional_number(name)?.unwrap_or(0.0))
    }

    /// Numeric field that may be left out or blank
    pub fn optional_number(&self, name: &str) -> Result<Option<f64>, FormError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() && name_is_optional(name) => Ok(None),
            Some(raw) => parse_number(name, raw).map(Some),
        }
    }
}

// Only the health index stress level may be submitted blank.
fn name_is_optional(name: &str) -> bool {
    name == "stress_level"
}

/// Parse one finite number, naming the field on failure
pub fn parse_number(field: &str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

enum FormEncoding {
    UrlEncoded,
    Multipart,
}

fn form_encoding(content_type: Option<&str>) -> Result<FormEncoding, FormError> {
    let Some(raw) = content_type else {
        return Ok(FormEncoding::UrlEncoded);
    };

    let mime: mime::Mime = raw
        .parse()
        .map_err(|_| FormError::UnsupportedContentType(raw.to_string()))?;

    if mime.type_() == mime::APPLICATION && mime.subtype() == mime::WWW_FORM_URLENCODED {
        Ok(FormEncoding::UrlEncoded)
    } else if mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA {
        Ok(FormEncoding::Multipart)
    } else {
        Err(FormError::UnsupportedContentType(raw.to_string()))
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match form_encoding(content_type.as_deref())? {
            FormEncoding::UrlEncoded => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| FormError::Malformed(e.to_string()))?;
                Ok(Self::from_urlencoded(&body))
            }
            FormEncoding::Multipart => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| FormError::Malformed(e.to_string()))?;

                let mut fields = Vec::new();
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| FormError::Malformed(e.to_string()))?
                {
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    if field.file_name().is_some() {
                        debug!("Skipping uploaded file in field '{}'", name);
                        continue;
                    }
                    let value = field.text().await.map_err(|e| {
                        warn!("Failed to read multipart field '{}': {}", name, e);
                        FormError::Malformed(e.to_string())
                    })?;
                    fields.push((name, value));
                }

                Ok(Self::new(fields))
            }
        }
    }
}
