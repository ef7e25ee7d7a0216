//! Aggregate metrics table.
//!
//! One CSV row per successfully scored article, in input order, under the
//! fixed header in [`MetricRow::COLUMNS`]. Records that failed are absent.

use crate::models::MetricRow;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Render `rows` as CSV text. The header is written even when `rows` is empty.
pub fn render_report(rows: &[MetricRow]) -> Result<String, Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(MetricRow::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the report to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(%path, rows = rows.len()))]
pub async fn write_report(rows: &[MetricRow], path: &str) -> Result<(), Box<dyn Error>> {
    let csv_text = render_report(rows)?;
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, csv_text).await?;
    info!("Wrote metrics report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> MetricRow {
        MetricRow {
            url_id: id.to_string(),
            url: format!("https://example.com/{id}"),
            positive_score: 3,
            negative_score: 1,
            polarity_score: 0.5,
            subjectivity_score: 0.1,
            avg_sentence_length: 12.5,
            percentage_complex_words: 33.3333,
            fog_index: 18.33,
            complex_word_count: 10,
            word_count: 30,
            syllable_per_word: 1.83,
            personal_pronouns: 2,
            avg_word_length: 5.1,
        }
    }

    #[test]
    fn test_header_matches_columns() {
        let csv_text = render_report(&[]).unwrap();
        assert_eq!(
            csv_text,
            "URL_ID,URL,Positive Score,Negative Score,Polarity Score,Subjectivity Score,\
             Avg Sentence Length,Percentage of Complex Words,Fog Index,Complex Word Count,\
             Word Count,Syllable Per Word,Personal Pronouns,Avg Word Length\n"
        );
    }

    #[test]
    fn test_rows_in_order() {
        let csv_text = render_report(&[row("b"), row("a")]).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("b,https://example.com/b,3,1,0.5,0.1,12.5,33.3333,18.33,10,30,1.83,2,5.1"));
        assert!(lines[2].starts_with("a,"));
    }

    #[test]
    fn test_report_reads_back() {
        let csv_text = render_report(&[row("x")]).unwrap();
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<MetricRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows, vec![row("x")]);
    }

    #[tokio::test]
    async fn test_write_report_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("Output.csv");
        write_report(&[row("1")], path.to_str().unwrap()).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("URL_ID,URL,"));
        assert_eq!(written.lines().count(), 2);
    }
}
