//! Two-stage DCF valuation engine.
//!
//! Pure domain logic only: no IO, no HTTP, no shared state. Each call to
//! [`compute`] is a deterministic function of its inputs and returns a
//! freshly built [`ValuationResult`] the caller owns exclusively.

pub mod engine;

pub use engine::{
    compute, ValuationError, ValuationInputs, ValuationResult, YearlyProjection, FORECAST_YEARS,
};
