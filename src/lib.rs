//! WealthTracker Engine - Wealth projection and financial freedom scoring
//!
//! This library provides:
//! - Compound-growth wealth projections with inflation adjustment
//! - Multi-scenario projection framework (conservative/moderate/aggressive)
//! - Retirement income estimates under the 4% withdrawal rule
//! - 0-1000 financial freedom score with improvement suggestions
//! - Analytics payload data model and JSON loader
//! - Missing-expense detection for the expense log

pub mod insights;
pub mod metrics;
pub mod projection;
pub mod scenario;
pub mod scoring;

// Re-export commonly used types
pub use metrics::AnalyticsPayload;
pub use projection::{project, ProjectionInput, ProjectionResult, RetirementEstimate};
pub use scenario::ScenarioRunner;
pub use scoring::{score, FreedomScoreInput, FreedomScoreResult, ScoreLabel};
