//! API error types

use miette::{Diagnostic, JSONReportHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, thiserror::Error, Diagnostic, Serialize, Deserialize)]
pub enum ApiError {
    /// Well-formed JSON that doesn't match the request schema
    #[error("Validation failed: {message}")]
    #[diagnostic(
        code(api::validation_error),
        help("Check the field errors for specific validation issues")
    )]
    ValidationError {
        message: String,
        fields: Option<Vec<FieldError>>,
    },

    /// Body is not valid JSON
    #[error("{message}")]
    #[diagnostic(
        code(api::json_error),
        help("Check that your JSON is valid and matches the expected schema")
    )]
    Json { message: String, json: String },

    /// Body was sent without a JSON content type
    #[error("Unsupported media type: {message}")]
    #[diagnostic(
        code(api::unsupported_media_type),
        help("Send the request body with `Content-Type: application/json`")
    )]
    UnsupportedMediaType { message: String },
}

/// Field-level validation error
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError { .. } => 422,
            ApiError::Json { .. } => 400,
            ApiError::UnsupportedMediaType { .. } => 415,
        }
    }

    /// Machine-readable error type used in response bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ValidationError { .. } => "validation_error",
            ApiError::Json { .. } => "json_error",
            ApiError::UnsupportedMediaType { .. } => "unsupported_media_type",
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            fields: None,
        }
    }

    /// Create a validation error with field-specific errors
    pub fn validation_with_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::ValidationError {
            message: message.into(),
            fields: Some(fields),
        }
    }

    /// Wrap a JSON failure with a rendered miette report as detail
    fn json(message: String, code: &str, help: &str) -> Self {
        let diagnostic = miette::miette!(code = code, help = help, "{}", message);

        let handler = JSONReportHandler::new();
        let mut json = String::new();
        handler
            .render_report(&mut json, diagnostic.as_ref())
            .unwrap_or_default();

        Self::Json { message, json }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            // Valid JSON, wrong shape
            Category::Data => Self::validation(err.to_string()),
            _ => Self::json(
                err.to_string(),
                "json::parse_error",
                "Check that your JSON is valid",
            ),
        }
    }
}

#[cfg(feature = "server")]
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        match rejection {
            JsonRejection::JsonDataError(e) => Self::validation(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => Self::UnsupportedMediaType {
                message: e.body_text(),
            },
            other => Self::json(
                other.body_text(),
                "json::syntax_error",
                "Check that your JSON is valid",
            ),
        }
    }
}

// Server-side response conversion
#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match &self {
            ApiError::ValidationError {
                fields: Some(fields),
                ..
            } => {
                error_obj["fields"] = serde_json::to_value(fields).unwrap_or_default();
            }
            ApiError::Json { json, .. } => {
                error_obj["detail"] = serde_json::to_value(json).unwrap_or_default();
            }
            _ => {}
        }

        let body = serde_json::json!({
            "error": error_obj,
            "timestamp": chrono::Utc::now(),
        });

        (status, Json(body)).into_response()
    }
}
