//! Output generation for the aggregate report and per-article text.
//!
//! # Submodules
//!
//! - [`report`]: Writes [`MetricRow`](crate::models::MetricRow)s as a CSV table
//! - [`json`]: Writes the same rows as a JSON array
//! - [`articles`]: Writes each extracted article to `{URL_ID}.txt`
//!
//! # Output Structure
//!
//! ```text
//! Output.csv                 # one row per scored article, input order
//! Output.json                # optional, same rows
//! ExtractedArticles/
//! ├── blackassign0001.txt
//! └── blackassign0002.txt
//! ```

pub mod articles;
pub mod json;
pub mod report;
