//! Retirement income estimate from the lump sum and the 4% rule
//!
//! Contributions are deliberately not modeled here; the Retirement Planning
//! card only compounds the current balance to the retirement date.

use serde::{Deserialize, Serialize};

/// Fixed safe-withdrawal rate (the 4% rule, not configurable)
pub const WITHDRAWAL_RATE: f64 = 0.04;

/// Estimated retirement position and income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementEstimate {
    /// Current wealth compounded annually to the retirement date
    pub expected_at_retirement: f64,

    /// First-year withdrawal under the 4% rule
    pub annual_withdrawal: f64,

    /// Annual withdrawal spread evenly over 12 months
    pub monthly_income: f64,
}

/// Compound the current balance annually to retirement and apply the 4% rule.
pub fn retirement_estimate(
    current_wealth: f64,
    annual_return_pct: f64,
    years_to_retirement: u32,
) -> RetirementEstimate {
    let expected_at_retirement =
        current_wealth * (1.0 + annual_return_pct / 100.0).powi(years_to_retirement as i32);
    let annual_withdrawal = expected_at_retirement * WITHDRAWAL_RATE;

    RetirementEstimate {
        expected_at_retirement,
        annual_withdrawal,
        monthly_income: annual_withdrawal / 12.0,
    }
}
