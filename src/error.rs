//! Per-record error types.
//!
//! Every failure that can happen while turning one input record into a
//! [`MetricRow`](crate::models::MetricRow) is an [`ArticleError`]. The batch
//! orchestrator logs these and moves on to the next record; none of them
//! abort a run.

use thiserror::Error;

/// Result alias for per-record processing.
pub type Result<T> = std::result::Result<T, ArticleError>;

/// Reasons a single article could not be scored.
#[derive(Error, Debug)]
pub enum ArticleError {
    /// The server answered with a non-success status code.
    #[error("Failed to fetch {url}: status code {status}")]
    Fetch { url: String, status: u16 },

    /// The request never produced a response (DNS, TLS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured content container is not present in the page.
    #[error("Content container `{selector}` not found in {url}")]
    MissingContainer { url: String, selector: String },

    /// A configured CSS selector does not parse.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A metric formula would divide by zero (no sentences or no content words).
    #[error("Cannot compute {metric}: article has no {what}")]
    DivideByZero {
        metric: &'static str,
        what: &'static str,
    },
}

impl ArticleError {
    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ArticleError::Fetch { .. } | ArticleError::Transport(_) => "fetch",
            ArticleError::MissingContainer { .. } | ArticleError::InvalidSelector { .. } => {
                "extraction"
            }
            ArticleError::DivideByZero { .. } => "divide_by_zero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let e = ArticleError::Fetch {
            url: "https://example.com/a".to_string(),
            status: 404,
        };
        assert_eq!(
            e.to_string(),
            "Failed to fetch https://example.com/a: status code 404"
        );
        assert_eq!(e.kind(), "fetch");
    }

    #[test]
    fn test_error_kinds() {
        let missing = ArticleError::MissingContainer {
            url: "u".to_string(),
            selector: "div.x".to_string(),
        };
        assert_eq!(missing.kind(), "extraction");

        let zero = ArticleError::DivideByZero {
            metric: "avg word length",
            what: "content words",
        };
        assert_eq!(zero.kind(), "divide_by_zero");
        assert_eq!(
            zero.to_string(),
            "Cannot compute avg word length: article has no content words"
        );
    }
}
