use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of explicit forecast periods before the perpetuity phase.
pub const FORECAST_YEARS: u32 = 5;

/// Valuation error.
///
/// Exactly one kind originates here: assumptions under which the
/// perpetuity formula is undefined or economically meaningless. Malformed
/// input (missing fields, non-numeric text) is an adapter concern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValuationError {
    #[error("invalid assumptions: {0}")]
    InvalidAssumptions(String),
}

impl ValuationError {
    pub fn invalid_assumptions(msg: impl Into<String>) -> Self {
        Self::InvalidAssumptions(msg.into())
    }
}

/// The four scalar assumptions driving a two-stage DCF valuation.
///
/// All rates are fractions (0.10 = 10%). Precondition: `discount_rate`
/// must strictly exceed `terminal_growth_rate`, else the Gordon Growth
/// denominator is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Baseline (period 0) owner earnings. Expected >= 0.
    pub current_earnings: f64,
    /// Annual discount rate.
    pub discount_rate: f64,
    /// Annual growth rate applied for periods 1-5.
    pub growth_rate: f64,
    /// Perpetual growth rate applied from period 6 onward.
    #[serde(rename = "terminal_growth")]
    pub terminal_growth_rate: f64,
}

impl ValuationInputs {
    /// Check the engine precondition.
    ///
    /// Non-finite assumptions are rejected first: with a NaN anywhere the
    /// rate comparison below is meaningless.
    pub fn validate(&self) -> Result<(), ValuationError> {
        let fields = [
            self.current_earnings,
            self.discount_rate,
            self.growth_rate,
            self.terminal_growth_rate,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(ValuationError::invalid_assumptions(
                "assumptions must be finite numbers",
            ));
        }
        if self.discount_rate <= self.terminal_growth_rate {
            return Err(ValuationError::invalid_assumptions(
                "discount rate must exceed terminal growth rate",
            ));
        }
        Ok(())
    }
}

/// One explicit forecast period (immutable, compared by value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Forecast period, 1-5, matching position in the projection sequence.
    #[serde(rename = "year")]
    pub period: u32,
    /// Earnings projected for this period.
    pub future_earnings: f64,
    /// This period's earnings discounted back to period 0.
    pub present_value: f64,
}

/// Full valuation breakdown: echoed inputs, the forecast timeline, and the
/// derived aggregates. All derived fields come from one invocation and are
/// consistent with each other by construction.
///
/// Wire field names (`year`, `total_pv_5years`, `total_dcf_value`, ...)
/// follow the JSON contract the calculator has always exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    #[serde(flatten)]
    pub inputs: ValuationInputs,
    /// Exactly `FORECAST_YEARS` entries, in period order.
    pub yearly_projections: Vec<YearlyProjection>,
    /// First cash flow of the perpetuity phase (grows at the terminal rate).
    pub year_6_earnings: f64,
    /// Gordon Growth perpetuity value as of the end of period 5.
    pub terminal_value: f64,
    pub pv_terminal_value: f64,
    #[serde(rename = "total_pv_5years")]
    pub total_pv_5_years: f64,
    #[serde(rename = "total_dcf_value")]
    pub total_value: f64,
    #[serde(rename = "five_year_percentage")]
    pub five_year_pct: f64,
    #[serde(rename = "terminal_percentage")]
    pub terminal_pct: f64,
}

/// Run the two-stage DCF valuation.
///
/// Five explicit periods compounded at `growth_rate`, then a Gordon Growth
/// perpetuity from period 6 at `terminal_growth_rate`, everything
/// discounted back at `discount_rate`. Fails with
/// [`ValuationError::InvalidAssumptions`] when the precondition does not
/// hold; no partial result is ever returned.
pub fn compute(inputs: &ValuationInputs) -> Result<ValuationResult, ValuationError> {
    inputs.validate()?;

    let ValuationInputs {
        current_earnings,
        discount_rate,
        growth_rate,
        terminal_growth_rate,
    } = *inputs;

    let mut yearly_projections = Vec::with_capacity(FORECAST_YEARS as usize);
    let mut total_pv_5_years = 0.0;
    for period in 1..=FORECAST_YEARS {
        let future_earnings = current_earnings * (1.0 + growth_rate).powi(period as i32);
        let present_value = future_earnings / (1.0 + discount_rate).powi(period as i32);
        total_pv_5_years += present_value;
        yearly_projections.push(YearlyProjection {
            period,
            future_earnings,
            present_value,
        });
    }

    // Period 6 is the first perpetuity cash flow: it grows at the terminal
    // rate, not the near-term rate.
    let year_6_earnings = current_earnings
        * (1.0 + growth_rate).powi(FORECAST_YEARS as i32)
        * (1.0 + terminal_growth_rate);
    let terminal_value = year_6_earnings / (discount_rate - terminal_growth_rate);
    let pv_terminal_value = terminal_value / (1.0 + discount_rate).powi(FORECAST_YEARS as i32);

    let total_value = total_pv_5_years + pv_terminal_value;

    // Zero baseline earnings make every component zero and the split 0/0.
    // Policy: report both shares as zero rather than let NaN escape.
    let (five_year_pct, terminal_pct) = if total_value == 0.0 {
        (0.0, 0.0)
    } else {
        (
            100.0 * total_pv_5_years / total_value,
            100.0 * pv_terminal_value / total_value,
        )
    };

    Ok(ValuationResult {
        inputs: *inputs,
        yearly_projections,
        year_6_earnings,
        terminal_value,
        pv_terminal_value,
        total_pv_5_years,
        total_value,
        five_year_pct,
        terminal_pct,
    })
}
