//! Input record source.
//!
//! Records are read from a CSV file with a header row containing at least
//! `URL_ID` and `URL`; other columns are ignored. Row order is preserved.

use crate::models::ArticleRecord;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument, warn};
use url::Url;

/// Parse records from CSV text.
pub fn parse_records(csv_text: &str) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<ArticleRecord>().enumerate() {
        let record = result?;
        if record.url.is_empty() {
            warn!(row = row + 1, url_id = %record.url_id, "Skipping row without URL");
            continue;
        }
        if let Err(e) = Url::parse(&record.url) {
            // Kept: the fetch will fail and be reported for this record alone.
            warn!(row = row + 1, url = %record.url, error = %e, "URL does not parse");
        }
        records.push(record);
    }
    Ok(records)
}

/// Read all records from the CSV file at `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_records(path: &str) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let csv_text = fs::read_to_string(path).await?;
    let records = parse_records(&csv_text)?;
    info!(count = records.len(), "Loaded input records");
    Ok(records)
}
