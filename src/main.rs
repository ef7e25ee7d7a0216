//! # Article Metrics
//!
//! A batch scraper that downloads web articles from a list of URLs, extracts
//! their text, and scores each one with a fixed set of readability and
//! sentiment metrics.
//!
//! ## Features
//!
//! - Extracts title, headings, paragraphs and list items from a configurable
//!   content container, removing repeated lines
//! - Scores dictionary-based polarity and subjectivity, a Fog-style
//!   readability index, syllable and complex-word counts, personal pronouns
//! - Writes one `{URL_ID}.txt` per article and an aggregate CSV (optionally JSON)
//!
//! ## Usage
//!
//! ```sh
//! article_metrics -i Input.csv -o Output.csv -l ./lexicon -a ./ExtractedArticles
//! ```
//!
//! ## Architecture
//!
//! 1. **Loading**: read the lexicon directory and the input records
//! 2. **Fetching**: download each article page (one at a time)
//! 3. **Extracting**: turn the page into deduplicated article text
//! 4. **Scoring**: clean the text into content words and compute the metrics
//! 5. **Output**: write per-article text files and the aggregate report
//!
//! A failure on one URL is logged and the run moves on to the next.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod inputs;
mod lexicon;
mod metrics;
mod models;
mod nlp;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::ScrapeConfig;
use lexicon::{LexiconMatch, LexiconSet};
use outputs::{articles, json, report};
use pipeline::Pipeline;
use scrapers::article::ArticleExtractor;
use scrapers::fetch::HttpFetcher;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Site profile ----
    let base = match &args.config {
        Some(path) => ScrapeConfig::load(path).await?,
        None => ScrapeConfig::default(),
    };
    let scrape_config = base.with_overrides(args.content_selector.as_deref(), args.timeout_secs);
    info!(
        content_selector = %scrape_config.content_selector,
        timeout_secs = scrape_config.timeout_secs,
        "Using scrape profile"
    );

    // Early check: ensure the article output dir is writable
    if let Err(e) = ensure_writable_dir(&args.articles_dir).await {
        error!(
            path = %args.articles_dir,
            error = %e,
            "Article output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Lexicon and records ----
    let matching = if args.fold_lexicon_case {
        LexiconMatch::CaseInsensitive
    } else {
        LexiconMatch::Exact
    };
    let lexicon = LexiconSet::load(Path::new(&args.lexicon_dir))
        .await?
        .with_matching(matching);
    info!(matching = ?lexicon.matching(), "Lexicon ready");

    let records = inputs::load_records(&args.input).await?;

    // ---- Process ----
    let extractor = ArticleExtractor::new(&scrape_config)?;
    let fetcher = HttpFetcher::new(&scrape_config)?;
    let batch = Pipeline::new(fetcher, extractor, &lexicon).run(records).await;

    for failure in &batch.failures {
        warn!(
            url_id = %failure.record.url_id,
            url = %failure.record.url,
            kind = failure.error.kind(),
            error = %failure.error,
            "Record omitted from report"
        );
    }

    // ---- Outputs ----
    if let Err(e) = report::write_report(&batch.rows, &args.output).await {
        error!(path = %args.output, error = %e, "Failed to write metrics report");
        return Err(e);
    }

    if let Some(json_path) = &args.json_output {
        if let Err(e) = json::write_rows(&batch.rows, json_path).await {
            error!(path = %json_path, error = %e, "Failed to write JSON report");
        }
    }

    let written = articles::write_articles(&batch.articles, &args.articles_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        total = batch.total(),
        scored = batch.rows.len(),
        failed = batch.failures.len(),
        articles_written = written,
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Analysis complete"
    );

    Ok(())
}
