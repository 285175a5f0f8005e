//! Year-by-year projection schedule
//!
//! Expands a single projection into one row per year for charting and CSV
//! export. The formulas are closed form, so row N is exactly `project` with
//! a horizon of N years.

use serde::{Deserialize, Serialize};

use super::engine::{project, ProjectionInput, ProjectionResult};

/// One year of the projection schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Year offset from today (1-indexed)
    pub year: u32,
    pub future_value: f64,
    pub inflation_adjusted_value: f64,
    pub total_contributions: f64,
    pub growth: f64,
}

/// Build the full schedule for years 1..=horizon.
pub fn project_schedule(input: &ProjectionInput) -> Vec<ProjectionRow> {
    (1..=input.horizon_years)
        .map(|year| {
            let ProjectionResult {
                future_value,
                inflation_adjusted_value,
                total_contributions,
                growth,
            } = project(&ProjectionInput { horizon_years: year, ..input.clone() });

            ProjectionRow {
                year,
                future_value,
                inflation_adjusted_value,
                total_contributions,
                growth,
            }
        })
        .collect()
}
