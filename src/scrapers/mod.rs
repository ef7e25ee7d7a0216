//! Fetching pages and extracting article text from them.
//!
//! Processing a record is a two-step pattern:
//!
//! 1. **Fetching**: download the page through a [`fetch::PageFetcher`]
//! 2. **Extracting**: turn the HTML into article text with an
//!    [`article::ArticleExtractor`]
//!
//! | Module | Role |
//! |--------|------|
//! | [`fetch`] | `PageFetcher` trait and the reqwest-backed `HttpFetcher` |
//! | [`article`] | Site-profile driven body extraction and deduplication |
//!
//! Failures at either step are [`ArticleError`](crate::error::ArticleError)s
//! scoped to the one record.

pub mod article;
pub mod fetch;
