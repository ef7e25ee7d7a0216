//! Per-article text files.
//!
//! Every article that was extracted, whether or not its metrics could be
//! computed, is written to `{articles_dir}/{URL_ID}.txt`.

use crate::models::ExtractedArticle;
use crate::utils::file_stem;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Path of the text file for `url_id` inside `dir`.
pub fn article_path(dir: &str, url_id: &str) -> PathBuf {
    Path::new(dir).join(format!("{}.txt", file_stem(url_id)))
}

/// Write each article's text. A failed write is logged and skipped.
///
/// Returns the number of files written.
#[instrument(level = "info", skip_all, fields(%dir, count = articles.len()))]
pub async fn write_articles(articles: &[ExtractedArticle], dir: &str) -> Result<usize, Box<dyn Error>> {
    fs::create_dir_all(dir).await?;

    let mut written = 0;
    for article in articles {
        let path = article_path(dir, &article.record.url_id);
        match fs::write(&path, &article.text).await {
            Ok(()) => {
                written += 1;
                info!(url_id = %article.record.url_id, url = %article.record.url, "Wrote extracted article");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to write extracted article");
            }
        }
    }
    Ok(written)
}
