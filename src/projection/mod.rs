//! Wealth projection: compound-growth engine, schedules, and retirement math

mod engine;
mod retirement;
mod schedule;

pub use engine::{project, project_scenarios, InputError, ProjectionInput, ProjectionResult};
pub use retirement::{retirement_estimate, RetirementEstimate, WITHDRAWAL_RATE};
pub use schedule::{project_schedule, ProjectionRow};
