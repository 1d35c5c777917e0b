//! Response types for the training duration API.
//!
//! Every failure is serialized as `{"error": {"code", "message", "details"?}}`
//! with a status chosen from the error's category.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;

use super::request::RequestError;

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Unexpected server error";

/// API error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(code: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("invalid_request", message)
    }

    /// Creates the generic internal error.
    pub fn internal() -> Self {
        Self::new("internal_error", INTERNAL_ERROR_MESSAGE)
    }
}

/// The envelope an [`ApiError`] is sent in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error.
    pub error: ApiError,
}

/// API error with HTTP status code.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a response from a status and an error.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Returns true if this response hides an internal failure.
    pub fn is_internal(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

impl From<RequestError> for ApiErrorResponse {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::InvalidRequest { message } => {
                Self::new(StatusCode::BAD_REQUEST, ApiError::invalid_request(message))
            }
            RequestError::MissingFields { fields } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "missing_fields",
                    format!("Missing fields: {}", fields.join(", ")),
                    serde_json::json!({ "missing": fields }),
                ),
            ),
            RequestError::InvalidPayload { message, details } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError {
                    code: "validation_error".to_string(),
                    message,
                    details,
                },
            ),
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::TypeMismatch { field, .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details("type_mismatch", message, serde_json::json!({ "field": field })),
            ),
            EngineError::RangeError { field, .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details("range_error", message, serde_json::json!({ "field": field })),
            ),
            EngineError::InvalidInputKind { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "invalid_input_kind",
                    message,
                    serde_json::json!({ "field": "input_kind" }),
                ),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. }
            | EngineError::CalculationError { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal())
            }
        }
    }
}
