//! Data models for input records and their scored representations.
//!
//! - [`ArticleRecord`]: one input row (identifier + URL)
//! - [`ArticleMetrics`]: the twelve derived metrics for one article
//! - [`MetricRow`]: the 14-column output row written to the aggregate report
//!
//! Column names on [`MetricRow`] are fixed; downstream spreadsheets key on them.

use serde::{Deserialize, Serialize};

/// One input row: an identifier and the URL of the article to analyze.
///
/// `URL_ID` is kept as text so identifiers like `blackassign0001` or
/// `123.0` round-trip untouched into file names and the report.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRecord {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// The twelve metrics computed for one article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetrics {
    pub positive_score: u64,
    pub negative_score: u64,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub complex_word_count: u64,
    pub word_count: u64,
    pub syllable_per_word: f64,
    pub personal_pronouns: u64,
    pub avg_word_length: f64,
}

/// A single row of the aggregate report.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Positive Score")]
    pub positive_score: u64,
    #[serde(rename = "Negative Score")]
    pub negative_score: u64,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage of Complex Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: u64,
    #[serde(rename = "Word Count")]
    pub word_count: u64,
    #[serde(rename = "Syllable Per Word")]
    pub syllable_per_word: f64,
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: u64,
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}

impl MetricRow {
    /// Column headers, in output order.
    pub const COLUMNS: [&'static str; 14] = [
        "URL_ID",
        "URL",
        "Positive Score",
        "Negative Score",
        "Polarity Score",
        "Subjectivity Score",
        "Avg Sentence Length",
        "Percentage of Complex Words",
        "Fog Index",
        "Complex Word Count",
        "Word Count",
        "Syllable Per Word",
        "Personal Pronouns",
        "Avg Word Length",
    ];

    pub fn new(record: &ArticleRecord, metrics: ArticleMetrics) -> Self {
        Self {
            url_id: record.url_id.clone(),
            url: record.url.clone(),
            positive_score: metrics.positive_score,
            negative_score: metrics.negative_score,
            polarity_score: metrics.polarity_score,
            subjectivity_score: metrics.subjectivity_score,
            avg_sentence_length: metrics.avg_sentence_length,
            percentage_complex_words: metrics.percentage_complex_words,
            fog_index: metrics.fog_index,
            complex_word_count: metrics.complex_word_count,
            word_count: metrics.word_count,
            syllable_per_word: metrics.syllable_per_word,
            personal_pronouns: metrics.personal_pronouns,
            avg_word_length: metrics.avg_word_length,
        }
    }
}

/// An article after extraction: its record and the text written to disk.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    pub record: ArticleRecord,
    pub text: String,
}
