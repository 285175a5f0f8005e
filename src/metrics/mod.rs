//! Analytics metrics: payload data model and JSON loader

mod data;
pub mod loader;

pub use data::{AnalyticsPayload, DashboardMetrics, WealthTrendPoint, STOCKS_SECURITIES_KEY};
pub use loader::{load_payload, load_payload_block, PayloadError};
