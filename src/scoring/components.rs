//! Component formulas for the financial freedom score
//!
//! Each component is clamped to [0, cap] before it is summed, so no
//! intermediate overshoot or negative value can leak into the composite.

use serde::{Deserialize, Serialize};

/// Net worth component cap
pub const NET_WORTH_CAP: f64 = 300.0;
/// Emergency fund component cap
pub const EMERGENCY_FUND_CAP: f64 = 200.0;
/// Savings rate component cap
pub const SAVINGS_RATE_CAP: f64 = 200.0;
/// Debt management component cap
pub const DEBT_CAP: f64 = 150.0;
/// Investment diversification component cap
pub const DIVERSIFICATION_CAP: f64 = 150.0;

/// Net worth level at which the component saturates
const NET_WORTH_TARGET: f64 = 500_000.0;
/// Points per month of emergency fund coverage
const EMERGENCY_POINTS_PER_MONTH: f64 = 33.33;

/// The five clamped sub-scores, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub net_worth: f64,
    pub emergency_fund: f64,
    pub savings_rate: f64,
    pub debt_management: f64,
    pub diversification: f64,
}

impl ScoreComponents {
    /// Raw composite before rounding, in [0, 1000] by construction
    pub fn total(&self) -> f64 {
        self.net_worth
            + self.emergency_fund
            + self.savings_rate
            + self.debt_management
            + self.diversification
    }
}

/// Linear ramp to the cap at a £500k net worth.
pub fn net_worth_score(current_wealth: f64) -> f64 {
    (current_wealth / NET_WORTH_TARGET * NET_WORTH_CAP).clamp(0.0, NET_WORTH_CAP)
}

/// 33.33 points per covered month, saturating at six months.
pub fn emergency_fund_score(emergency_fund_months: f64) -> f64 {
    (emergency_fund_months * EMERGENCY_POINTS_PER_MONTH).clamp(0.0, EMERGENCY_FUND_CAP)
}

/// Trailing 3-month savings rate scaled by 1000. The income denominator is
/// floored at 1 so a zero-income quarter scores 0 instead of dividing by zero.
pub fn savings_rate_score(net_savings_3m: f64, total_income_3m: f64) -> f64 {
    let savings_rate = net_savings_3m / total_income_3m.max(1.0);
    (savings_rate * 1000.0).clamp(0.0, SAVINGS_RATE_CAP)
}

/// Debt ratio penalty. The ratio cancels to 0 for any non-negative wealth,
/// making the component a constant 150 there; that matches the production
/// formula and is kept verbatim (see DESIGN.md).
pub fn debt_management_score(current_wealth: f64) -> f64 {
    let debt_ratio = (current_wealth - current_wealth.max(0.0)).abs() / current_wealth.max(1.0);
    (DEBT_CAP - debt_ratio * DEBT_CAP).clamp(0.0, DEBT_CAP)
}

/// Share of wealth held in stocks and securities, doubled and capped.
///
/// A missing or zero stocks balance scores 0 (the upstream payload reports
/// zero and absent interchangeably). A positive balance against zero wealth
/// saturates at the cap rather than producing NaN.
pub fn diversification_score(stocks_securities: Option<f64>, current_wealth: f64) -> f64 {
    match stocks_securities {
        Some(stocks) if stocks > 0.0 => {
            (stocks / current_wealth * 300.0).clamp(0.0, DIVERSIFICATION_CAP)
        }
        _ => 0.0,
    }
}
