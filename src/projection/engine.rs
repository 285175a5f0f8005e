//! Core projection engine for compound-growth wealth projections

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inputs for a wealth projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Current total wealth (monetary units, >= 0)
    pub current_wealth: f64,

    /// Monthly contribution; negative models a planned drawdown
    pub monthly_contribution: f64,

    /// Expected annual return as a whole-number percentage (7 means 7%)
    pub annual_return_pct: f64,

    /// Expected annual inflation as a whole-number percentage
    pub annual_inflation_pct: f64,

    /// Projection horizon in years
    pub horizon_years: u32,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        // Default assumptions from the Projections screen
        Self {
            current_wealth: 250_000.0,
            monthly_contribution: 2_000.0,
            annual_return_pct: 7.0,
            annual_inflation_pct: 3.0,
            horizon_years: 10,
        }
    }
}

/// Validation error for projection inputs supplied at a trust boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("horizon must be at least 1 year")]
    ZeroHorizon,
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

impl ProjectionInput {
    /// Check preconditions before projecting user-supplied numbers.
    /// `monthly_contribution` may be negative (planned drawdown), everything
    /// else must be non-negative and finite.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("current_wealth", self.current_wealth),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_return_pct", self.annual_return_pct),
            ("annual_inflation_pct", self.annual_inflation_pct),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if self.horizon_years == 0 {
            return Err(InputError::ZeroHorizon);
        }
        if self.current_wealth < 0.0 {
            return Err(InputError::Negative { field: "current_wealth" });
        }
        if self.annual_return_pct < 0.0 {
            return Err(InputError::Negative { field: "annual_return_pct" });
        }
        if self.annual_inflation_pct < 0.0 {
            return Err(InputError::Negative { field: "annual_inflation_pct" });
        }
        Ok(())
    }

    /// Copy of this input with a different expected return
    pub fn with_return_pct(&self, annual_return_pct: f64) -> Self {
        Self { annual_return_pct, ..self.clone() }
    }
}

/// Output of a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Nominal projected value at the horizon
    pub future_value: f64,

    /// Future value deflated by cumulative inflation over the horizon
    pub inflation_adjusted_value: f64,

    /// Initial wealth plus every contribution made over the horizon
    pub total_contributions: f64,

    /// future_value - total_contributions, by construction
    pub growth: f64,
}

/// Project wealth forward over the input horizon.
///
/// The lump sum compounds annually at the nominal annual rate while the
/// contribution stream compounds monthly at annual_return_pct / 100 / 12.
/// The mixed convention matches the production formula; see DESIGN.md
/// before changing either leg.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let annual_rate = input.annual_return_pct / 100.0;
    let monthly_rate = annual_rate / 12.0;
    let months = input.horizon_years * 12;
    let years = input.horizon_years as i32;

    let lump_sum_fv = input.current_wealth * (1.0 + annual_rate).powi(years);

    // Ordinary annuity future value; at rate zero the closed form divides
    // 0 by 0, so the stream degrades to a simple sum of contributions.
    let contributions_fv = if monthly_rate == 0.0 {
        input.monthly_contribution * months as f64
    } else {
        input.monthly_contribution * ((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate
    };

    let future_value = lump_sum_fv + contributions_fv;
    let inflation_adjusted_value =
        future_value / (1.0 + input.annual_inflation_pct / 100.0).powi(years);
    let total_contributions = input.current_wealth + input.monthly_contribution * months as f64;

    ProjectionResult {
        future_value,
        inflation_adjusted_value,
        total_contributions,
        growth: future_value - total_contributions,
    }
}

/// Run one projection per labeled return rate, all other inputs held fixed.
/// Output order follows the caller-supplied order.
pub fn project_scenarios<'a>(
    input: &ProjectionInput,
    rates_by_label: &'a [(&'a str, f64)],
) -> Vec<(&'a str, ProjectionResult)> {
    rates_by_label
        .iter()
        .map(|&(label, rate)| (label, project(&input.with_return_pct(rate))))
        .collect()
}
