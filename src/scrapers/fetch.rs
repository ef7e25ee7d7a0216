//! Page fetching.
//!
//! The pipeline talks to the network through the [`PageFetcher`] trait so
//! that batch runs can be exercised against in-memory pages. [`HttpFetcher`]
//! is the reqwest-backed implementation used by the binary.

use crate::config::ScrapeConfig;
use crate::error::{ArticleError, Result};
use std::future::Future;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Raw response for one URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can retrieve a page by URL.
pub trait PageFetcher {
    /// Fetch `url`, returning whatever status the server answered with.
    ///
    /// Only transport failures are errors here; status handling is left to
    /// [`fetch_html`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage>> + Send;
}

/// Blocking-per-request HTTP fetcher with a configurable timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(FetchedPage { status, body })
    }
}

/// Fetch `url` and return its HTML, treating any status other than 200 as
/// [`ArticleError::Fetch`].
pub async fn fetch_html<F: PageFetcher>(fetcher: &F, url: &str) -> Result<String> {
    let page = fetcher.fetch(url).await?;
    if !page.is_ok() {
        warn!(%url, status = page.status, "Non-success status");
        return Err(ArticleError::Fetch {
            url: url.to_string(),
            status: page.status,
        });
    }
    Ok(page.body)
}
