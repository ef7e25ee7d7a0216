//! Command-line interface definitions for Article Metrics.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the Article Metrics application.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// article_metrics -i Input.csv -o Output.csv -l ./lexicon
///
/// # Custom site profile and a JSON copy of the report
/// article_metrics -i Input.csv -o Output.csv -l ./lexicon -c site.yaml --json-output out.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// CSV file with `URL_ID` and `URL` columns
    #[arg(short, long, env = "ARTICLE_METRICS_INPUT")]
    pub input: String,

    /// Path of the aggregate metrics report (CSV)
    #[arg(short, long, env = "ARTICLE_METRICS_OUTPUT")]
    pub output: String,

    /// Directory receiving one `{URL_ID}.txt` file per extracted article
    #[arg(short, long, env = "ARTICLE_METRICS_ARTICLES_DIR", default_value = "ExtractedArticles")]
    pub articles_dir: String,

    /// Directory holding `StopWords/` and `MasterDictionary/`
    #[arg(short, long, env = "ARTICLE_METRICS_LEXICON_DIR")]
    pub lexicon_dir: String,

    /// Optional path for a JSON copy of the aggregate report
    #[arg(long, env = "ARTICLE_METRICS_JSON_OUTPUT")]
    pub json_output: Option<String>,

    /// Optional path to a YAML site profile
    #[arg(short, long, env = "ARTICLE_METRICS_CONFIG")]
    pub config: Option<String>,

    /// CSS selector of the article body container (overrides the profile)
    #[arg(long, env = "ARTICLE_METRICS_CONTENT_SELECTOR")]
    pub content_selector: Option<String>,

    /// HTTP request timeout in seconds (overrides the profile)
    #[arg(long, env = "ARTICLE_METRICS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Match sentiment lexicon entries case-insensitively.
    /// Off by default so scores stay comparable with earlier reports.
    #[arg(long, env = "ARTICLE_METRICS_FOLD_LEXICON_CASE")]
    pub fold_lexicon_case: bool,
}
