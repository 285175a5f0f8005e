//! Data structures matching the analytics payload format

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::FreedomScoreInput;

/// Asset-category key carrying the stocks and securities balance
pub const STOCKS_SECURITIES_KEY: &str = "stocks_securities";

/// Aggregate dashboard metrics for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Current total wealth
    pub current_wealth: f64,

    /// Absolute wealth change over the trailing 3 months
    #[serde(default)]
    pub wealth_change_3m: f64,

    /// Percentage wealth change over the trailing 3 months
    #[serde(default)]
    pub wealth_change_percent: f64,

    /// Gross income over the trailing 3 months
    pub total_income_3m: f64,

    /// Total expenses over the trailing 3 months
    #[serde(default)]
    pub total_expenses_3m: f64,

    /// Net savings over the trailing 3 months
    pub net_savings_3m: f64,

    /// Months of expenses covered by liquid savings
    pub emergency_fund_months: f64,
}

/// One point of the historical wealth trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthTrendPoint {
    pub date: NaiveDate,
    pub total_wealth: f64,
    #[serde(default)]
    pub cash_savings: f64,
    #[serde(default)]
    pub stocks_securities: f64,
    #[serde(default)]
    pub real_estate: f64,
    #[serde(default)]
    pub retirement_accounts: f64,
    #[serde(default)]
    pub business_assets: f64,
    #[serde(default)]
    pub other_investments: f64,
}

/// Full analytics payload as served by the analytics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    pub metrics: DashboardMetrics,

    /// Historical wealth trend, oldest first
    #[serde(default)]
    pub wealth_trend: Vec<WealthTrendPoint>,

    /// Asset breakdown by category name; categories may be missing entirely
    #[serde(default)]
    pub top_asset_categories: HashMap<String, f64>,
}

impl AnalyticsPayload {
    /// Stocks and securities balance from the asset breakdown, if reported
    pub fn stocks_securities(&self) -> Option<f64> {
        self.top_asset_categories.get(STOCKS_SECURITIES_KEY).copied()
    }
}

impl From<&AnalyticsPayload> for FreedomScoreInput {
    fn from(payload: &AnalyticsPayload) -> Self {
        Self {
            current_wealth: payload.metrics.current_wealth,
            emergency_fund_months: payload.metrics.emergency_fund_months,
            net_savings_3m: payload.metrics.net_savings_3m,
            total_income_3m: payload.metrics.total_income_3m,
            stocks_securities: payload.stocks_securities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAYLOAD: &str = r#"{
        "metrics": {
            "current_wealth": 550000.0,
            "wealth_change_3m": 25000.0,
            "wealth_change_percent": 4.8,
            "total_income_3m": 15000.0,
            "total_expenses_3m": 9000.0,
            "net_savings_3m": 6000.0,
            "emergency_fund_months": 2.8
        },
        "wealth_trend": [
            { "date": "2025-03-01", "total_wealth": 500000.0, "stocks_securities": 75000.0 },
            { "date": "2025-04-01", "total_wealth": 510000.0 }
        ],
        "top_asset_categories": {
            "real_estate": 450000.0,
            "stocks_securities": 75000.0,
            "cash_savings": 25000.0
        }
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let payload: AnalyticsPayload = serde_json::from_str(SAMPLE_PAYLOAD).unwrap();

        assert_eq!(payload.metrics.current_wealth, 550_000.0);
        assert_eq!(payload.metrics.emergency_fund_months, 2.8);
        assert_eq!(payload.wealth_trend.len(), 2);
        assert_eq!(
            payload.wealth_trend[0].date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        // Omitted trend categories default to zero
        assert_eq!(payload.wealth_trend[1].stocks_securities, 0.0);
        assert_eq!(payload.stocks_securities(), Some(75_000.0));
    }

    #[test]
    fn test_missing_optional_sections() {
        let json = r#"{
            "metrics": {
                "current_wealth": 100000.0,
                "total_income_3m": 12000.0,
                "net_savings_3m": 3000.0,
                "emergency_fund_months": 4.0
            }
        }"#;
        let payload: AnalyticsPayload = serde_json::from_str(json).unwrap();

        assert!(payload.wealth_trend.is_empty());
        assert!(payload.top_asset_categories.is_empty());
        assert_eq!(payload.stocks_securities(), None);
    }

    #[test]
    fn test_freedom_score_input_from_payload() {
        let payload: AnalyticsPayload = serde_json::from_str(SAMPLE_PAYLOAD).unwrap();
        let input = FreedomScoreInput::from(&payload);

        assert_eq!(input.current_wealth, 550_000.0);
        assert_eq!(input.emergency_fund_months, 2.8);
        assert_eq!(input.net_savings_3m, 6_000.0);
        assert_eq!(input.total_income_3m, 15_000.0);
        assert_eq!(input.stocks_securities, Some(75_000.0));
    }
}
