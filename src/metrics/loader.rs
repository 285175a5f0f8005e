//! JSON-based analytics payload loader
//!
//! Reads payloads exported from the analytics endpoint, either a single
//! object or an array of them for batch runs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::data::AnalyticsPayload;

/// Failure to read or decode an analytics payload file
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read payload file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse payload JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a single analytics payload from a JSON file
pub fn load_payload(path: &Path) -> Result<AnalyticsPayload, PayloadError> {
    let file = File::open(path)?;
    let payload: AnalyticsPayload = serde_json::from_reader(BufReader::new(file))?;
    debug!(
        "loaded payload: wealth={:.2}, {} trend points, {} asset categories",
        payload.metrics.current_wealth,
        payload.wealth_trend.len(),
        payload.top_asset_categories.len()
    );
    Ok(payload)
}

/// Load an array of analytics payloads from a JSON file
pub fn load_payload_block(path: &Path) -> Result<Vec<AnalyticsPayload>, PayloadError> {
    let file = File::open(path)?;
    let payloads: Vec<AnalyticsPayload> = serde_json::from_reader(BufReader::new(file))?;
    debug!("loaded {} payloads from {}", payloads.len(), path.display());
    Ok(payloads)
}
