//! HTTP request handlers for the training duration API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::format_summary;
use crate::config::{LegalRules, RuleSetMetadata};
use crate::models::DurationResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Version reported in every successful response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Body of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The calculated duration.
    pub result: DurationResult,
    /// Facts about this particular call.
    pub meta: ResponseMeta,
}

/// Per-call metadata, kept apart from the deterministic result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Correlation id, also present in the server logs.
    pub calculation_id: Uuid,
    /// When the calculation finished.
    pub timestamp: DateTime<Utc>,
    /// Engine version.
    pub engine_version: String,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}

/// Body of `GET /api/rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesResponse {
    /// Which rule set is loaded.
    pub metadata: RuleSetMetadata,
    /// The values the calculator applies.
    pub rules: LegalRules,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/api/calculate/summary", post(summary_handler))
        .route("/api/rules", get(rules_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /api/calculate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match run_calculation(&state, payload, correlation_id) {
        Ok((result, duration_us)) => {
            let body = CalculationResponse {
                result,
                meta: ResponseMeta {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    duration_us,
                },
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(api_error) => api_error.into_response(),
    }
}

/// Handler for POST /api/calculate/summary.
///
/// Same input as `/api/calculate`; answers with a plain-text report.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    match run_calculation(&state, payload, correlation_id) {
        Ok((result, _)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format_summary(&result),
        )
            .into_response(),
        Err(api_error) => api_error.into_response(),
    }
}

/// Handler for GET /api/rules.
async fn rules_handler(State(state): State<AppState>) -> Json<RulesResponse> {
    let config = state.config();
    Json(RulesResponse {
        metadata: config.metadata().clone(),
        rules: config.rules().clone(),
    })
}

/// Handler for GET /health.
async fn health_handler() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Parses the body and runs the calculator, logging the outcome.
fn run_calculation(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<(DurationResult, u64), ApiErrorResponse> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected request body"
        );
        rejection_to_error(&rejection)
    })?;

    let request = CalculationRequest::from_json(&body).map_err(|err| {
        let response = ApiErrorResponse::from(err);
        warn!(
            correlation_id = %correlation_id,
            code = %response.error.code,
            message = %response.error.message,
            "Invalid calculation request"
        );
        response
    })?;

    let start_time = Instant::now();
    let outcome = state.calculator().compute(
        &request.base_duration_months,
        &request.full_time_hours,
        &request.part_time_input,
        &request.shortening_grounds,
        &request.input_kind,
    );
    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                base_months = result.original_months,
                final_months = result.final_months,
                no_disadvantage_applied = result.no_disadvantage_applied,
                duration_us,
                "Calculation completed successfully"
            );
            Ok((result, duration_us))
        }
        Err(err) if err.is_input_error() => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected input"
            );
            Err(err.into())
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            Err(err.into())
        }
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> ApiErrorResponse {
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected application/json request body".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        JsonRejection::JsonDataError(err) => err.body_text(),
        _ => "Failed to read request body".to_string(),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::invalid_request(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::ErrorBody;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(ConfigLoader::statutory()))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = r#"{
            "base_duration_months": 36,
            "full_time_hours": 40,
            "part_time_input": 75,
            "input_kind": "percentage",
            "shortening_grounds": {}
        }"#;
        let response = create_test_router()
            .oneshot(post_json("/api/calculate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let parsed: CalculationResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(parsed.result.final_months, 48);
        assert_eq!(parsed.meta.engine_version, ENGINE_VERSION);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = create_test_router()
            .oneshot(post_json("/api/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error.code, "invalid_request");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/calculate")
            .body(Body::from("{}"))
            .unwrap();
        let response = create_test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error.code, "invalid_request");
        assert!(error.error.message.contains("application/json"));
    }

    #[tokio::test]
    async fn test_summary_returns_text() {
        let body = r#"{
            "base_duration_months": 36,
            "full_time_hours": 40,
            "part_time_input": 30,
            "input_kind": "hours",
            "shortening_grounds": {}
        }"#;
        let response = create_test_router()
            .oneshot(post_json("/api/calculate/summary", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/plain; charset=utf-8");
        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.contains("48 months"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = create_test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
