//! HTTP API module for the training duration engine.
//!
//! Wraps the calculator in an axum router: request parsing and number
//! coercion, status mapping for failures, and per-call metadata.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{CalculationResponse, ENGINE_VERSION, ResponseMeta, RulesResponse, create_router};
pub use request::{
    CalculationRequest, ExperienceAnswers, REQUIRED_FIELDS, RequestError, operand_from_value,
    parse_locale_number,
};
pub use response::{ApiError, ApiErrorResponse, ErrorBody, INTERNAL_ERROR_MESSAGE};
pub use state::AppState;
