use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto, errors};

pub async fn calculate_dcf(Json(body): Json<dto::ValuationRequest>) -> axum::response::Response {
    let inputs = match dto::to_valuation_inputs(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match dcf_valuation::compute(&inputs) {
        Ok(result) => {
            tracing::info!(
                total_value = result.total_value,
                terminal_pct = result.terminal_pct,
                "valuation computed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "valuation rejected");
            errors::valuation_error_to_response(err)
        }
    }
}
