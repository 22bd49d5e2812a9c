use axum::{
    routing::{get, post},
    Router,
};

pub mod system;
pub mod valuation;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/calculate-dcf", post(valuation::calculate_dcf))
}
