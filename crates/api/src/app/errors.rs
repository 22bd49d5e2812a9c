use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dcf_valuation::ValuationError;

/// Map an engine failure to an HTTP response.
///
/// The engine's reason string is surfaced to the caller verbatim.
pub fn valuation_error_to_response(err: ValuationError) -> axum::response::Response {
    match err {
        ValuationError::InvalidAssumptions(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_assumptions", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
