//! Site profile configuration for the article extractor and HTTP client.
//!
//! Which container holds the article body differs from site to site, so it is
//! configuration rather than a constant. A profile can be loaded from YAML:
//!
//! ```yaml
//! content_selector: "div.td-post-content.tagdiv-type"
//! title_selector: "h1"
//! block_selector: "h1, p, ul, ol"
//! timeout_secs: 30
//! ```
//!
//! Missing keys fall back to the defaults below, and command-line flags
//! override whatever the file says.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

pub const DEFAULT_CONTENT_SELECTOR: &str = "div.td-post-content.tagdiv-type";
pub const DEFAULT_TITLE_SELECTOR: &str = "h1";
pub const DEFAULT_BLOCK_SELECTOR: &str = "h1, p, ul, ol";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("article_metrics/", env!("CARGO_PKG_VERSION"));

/// How the extractor and fetcher behave for one family of sites.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// CSS selector of the element that contains the article body.
    pub content_selector: String,
    /// CSS selector whose first match supplies the title line.
    pub title_selector: String,
    /// Elements visited inside the container, in document order.
    /// `ul`/`ol` matches are expanded into their list items.
    pub block_selector: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            block_selector: DEFAULT_BLOCK_SELECTOR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a profile from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load a profile from a YAML file.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub async fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let yaml = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&yaml)?;
        info!(content_selector = %config.content_selector, "Loaded scrape profile");
        Ok(config)
    }

    /// Apply command-line overrides on top of this profile.
    pub fn with_overrides(mut self, content_selector: Option<&str>, timeout_secs: Option<u64>) -> Self {
        if let Some(selector) = content_selector {
            self.content_selector = selector.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }
}
