use axum::http::StatusCode;
use serde::Deserialize;

use dcf_valuation::ValuationInputs;

use crate::app::errors;

/// Request body for `POST /calculate-dcf`.
///
/// Field names match the engine's wire contract; `serde` rejects missing
/// or non-numeric fields before this struct ever exists.
#[derive(Debug, Deserialize)]
pub struct ValuationRequest {
    pub current_earnings: f64,
    pub discount_rate: f64,
    pub growth_rate: f64,
    pub terminal_growth: f64,
}

/// Adapter-level validation: reject rather than coerce.
///
/// Non-finite numbers and negative baseline earnings never reach the
/// engine. Rate-ordering checks stay in the engine, which owns that
/// precondition.
pub fn to_valuation_inputs(
    body: ValuationRequest,
) -> Result<ValuationInputs, axum::response::Response> {
    let fields = [
        body.current_earnings,
        body.discount_rate,
        body.growth_rate,
        body.terminal_growth,
    ];
    if fields.iter().any(|v| !v.is_finite()) {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "all assumptions must be finite numbers",
        ));
    }
    if body.current_earnings < 0.0 {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "current earnings must not be negative",
        ));
    }

    Ok(ValuationInputs {
        current_earnings: body.current_earnings,
        discount_rate: body.discount_rate,
        growth_rate: body.growth_rate,
        terminal_growth_rate: body.terminal_growth,
    })
}
