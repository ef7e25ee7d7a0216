//! Batch orchestration: fetch, extract, clean and score each input record.
//!
//! Records are processed strictly one after another. Each record is fetched
//! and extracted once; the same text feeds both the metrics and the
//! per-article file. Any [`ArticleError`] is confined to its record: it is
//! logged, collected in [`BatchReport::failures`], and the batch continues.

use crate::error::ArticleError;
use crate::lexicon::LexiconSet;
use crate::metrics;
use crate::models::{ArticleRecord, ExtractedArticle, MetricRow};
use crate::scrapers::article::ArticleExtractor;
use crate::scrapers::fetch::{PageFetcher, fetch_html};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, instrument, warn};

/// A record that did not make it into the report.
#[derive(Debug)]
pub struct RecordFailure {
    pub record: ArticleRecord,
    pub error: ArticleError,
}

/// Everything a batch run produced.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Scored rows, in input order.
    pub rows: Vec<MetricRow>,
    /// Every successfully extracted article, scored or not, in input order.
    pub articles: Vec<ExtractedArticle>,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.rows.len() + self.failures.len()
    }
}

enum Outcome {
    Scored(ExtractedArticle, MetricRow),
    /// Extracted but the metrics could not be computed.
    Unscored(ExtractedArticle, ArticleError),
    Failed(ArticleRecord, ArticleError),
}

/// Fetcher, extractor and lexicon for one run.
#[derive(Debug)]
pub struct Pipeline<'a, F> {
    fetcher: F,
    extractor: ArticleExtractor,
    lexicon: &'a LexiconSet,
}

impl<'a, F: PageFetcher> Pipeline<'a, F> {
    pub fn new(fetcher: F, extractor: ArticleExtractor, lexicon: &'a LexiconSet) -> Self {
        Self {
            fetcher,
            extractor,
            lexicon,
        }
    }

    /// Process every record in order.
    #[instrument(level = "info", skip_all, fields(count = records.len()))]
    pub async fn run(&self, records: Vec<ArticleRecord>) -> BatchReport {
        let outcomes: Vec<Outcome> = stream::iter(records)
            .then(|record| self.process(record))
            .collect()
            .await;

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Scored(article, row) => {
                    report.articles.push(article);
                    report.rows.push(row);
                }
                Outcome::Unscored(article, error) => {
                    let record = article.record.clone();
                    report.articles.push(article);
                    report.failures.push(RecordFailure { record, error });
                }
                Outcome::Failed(record, error) => {
                    report.failures.push(RecordFailure { record, error });
                }
            }
        }

        info!(
            total = report.total(),
            successful = report.rows.len(),
            failed = report.failures.len(),
            extracted = report.articles.len(),
            "Completed batch"
        );
        report
    }

    #[instrument(level = "info", skip_all, fields(url_id = %record.url_id, url = %record.url))]
    async fn process(&self, record: ArticleRecord) -> Outcome {
        let text = match self.extract(&record).await {
            Ok(text) => text,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Failed to process URL");
                return Outcome::Failed(record, e);
            }
        };
        debug!(preview = %truncate_for_log(&text, 200), "Extracted text");

        let scored = metrics::analyze(&text, self.lexicon);
        let article = ExtractedArticle { record, text };

        match scored {
            Ok(metrics) => {
                info!(
                    words = metrics.word_count,
                    fog_index = metrics.fog_index,
                    polarity = metrics.polarity_score,
                    "Scored article"
                );
                let row = MetricRow::new(&article.record, metrics);
                Outcome::Scored(article, row)
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Extracted article could not be scored");
                Outcome::Unscored(article, e)
            }
        }
    }

    async fn extract(&self, record: &ArticleRecord) -> Result<String, ArticleError> {
        let html = fetch_html(&self.fetcher, &record.url).await?;
        self.extractor.extract(&html, &record.url)
    }
}
