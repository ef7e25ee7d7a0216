//! JSON copy of the aggregate report.
//!
//! Serializes the same [`MetricRow`]s as the CSV report, as an array of
//! objects keyed by the report's column names.

use crate::models::MetricRow;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `rows` as pretty-printed JSON to `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_rows(rows: &[MetricRow], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(rows)?;

    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent).await {
                error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
                return Err(e.into());
            }
        }
    }

    fs::write(path, json).await?;
    info!(rows = rows.len(), "Wrote JSON report");
    Ok(())
}
