//! Article body extraction.
//!
//! Turns a fetched HTML page into plain article text: an optional title line
//! followed by the headings, paragraphs and list items of the configured
//! content container, one per line with blank lines between them.
//!
//! # Deduplication
//!
//! Two passes keep boilerplate repeated by site templates out of the text:
//!
//! 1. A list item is skipped when its text already occurs anywhere in the text
//!    accumulated so far (substring match, not just earlier items of the same list).
//! 2. After accumulation every line that repeats an earlier line, or a line of
//!    the title, is dropped. Repeated lines within the title collapse too.

use crate::config::ScrapeConfig;
use crate::error::{ArticleError, Result};
use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Compiled selectors for one site profile.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    title: Selector,
    content: Selector,
    blocks: Selector,
    list_items: Selector,
    content_selector: String,
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ArticleError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Text of `element` with each text node trimmed, empty nodes dropped,
/// and the rest joined by `separator`.
fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .join(separator)
}

fn is_list(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "ul" | "ol")
}

impl ArticleExtractor {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            title: parse_selector(&config.title_selector)?,
            content: parse_selector(&config.content_selector)?,
            blocks: parse_selector(&config.block_selector)?,
            list_items: parse_selector("li")?,
            content_selector: config.content_selector.clone(),
        })
    }

    /// Extract the article text from `html`.
    ///
    /// `url` is only used in error messages. Fails with
    /// [`ArticleError::MissingContainer`] when the content container is absent;
    /// an empty container yields empty text (plus the title, if any).
    #[instrument(level = "debug", skip_all, fields(%url))]
    pub fn extract(&self, html: &str, url: &str) -> Result<String> {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(|h| dedup_title(&joined_text(h, "")))
            .filter(|t| !t.is_empty());

        let container = document.select(&self.content).next().ok_or_else(|| {
            ArticleError::MissingContainer {
                url: url.to_string(),
                selector: self.content_selector.clone(),
            }
        })?;

        let accumulated = self.accumulate(container);
        let body = dedup_lines(&accumulated, title.as_deref());

        debug!(
            has_title = title.is_some(),
            raw_bytes = accumulated.len(),
            bytes = body.len(),
            "Extracted article text"
        );

        Ok(match title {
            Some(title) if !body.is_empty() => format!("{title}\n\n{body}"),
            Some(title) => title,
            None => body,
        })
    }

    fn accumulate(&self, container: ElementRef<'_>) -> String {
        let mut accumulated = String::new();
        for element in container.select(&self.blocks) {
            if is_list(&element) {
                for item in element.select(&self.list_items) {
                    let text = joined_text(item, " ");
                    if !accumulated.contains(&text) {
                        accumulated.push_str("- ");
                        accumulated.push_str(&text);
                        accumulated.push('\n');
                    }
                }
                accumulated.push('\n');
            } else {
                accumulated.push_str(&joined_text(element, " "));
                accumulated.push_str("\n\n");
            }
        }
        accumulated
    }
}

/// Title text with repeated lines removed; line breaks are kept.
fn dedup_title(title: &str) -> String {
    title.lines().filter(|l| !l.is_empty()).unique().join("\n")
}

/// Keep the first occurrence of every line, drop non-empty lines that are
/// part of the title, rejoin with blank lines and trim.
fn dedup_lines(accumulated: &str, title: Option<&str>) -> String {
    let title_lines: HashSet<&str> = title
        .map(|t| t.lines().filter(|l| !l.is_empty()).collect())
        .unwrap_or_default();

    accumulated
        .split('\n')
        .filter(|line| line.is_empty() || !title_lines.contains(line))
        .unique()
        .join("\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/post";

    fn extractor() -> ArticleExtractor {
        ArticleExtractor::new(&ScrapeConfig::default()).unwrap()
    }

    fn page(body: &str) -> String {
        format!(
            r#"<html><body><header><h1> Rising Markets </h1></header>
            <div class="td-post-content tagdiv-type">{body}</div>
            <footer><p>Footer text</p></footer></body></html>"#
        )
    }

    fn assert_unique_lines(text: &str) {
        let mut seen = HashSet::new();
        for line in text.lines().filter(|l| !l.is_empty()) {
            assert!(seen.insert(line), "duplicate line: {line}");
        }
    }

    #[test]
    fn test_title_and_paragraphs() {
        let html = page("<p>First paragraph.</p><p>Second <b>bold</b> paragraph.</p>");
        let text = extractor().extract(&html, URL).unwrap();
        assert_eq!(
            text,
            "Rising Markets\n\nFirst paragraph.\n\n\n\nSecond bold paragraph."
        );
    }

    #[test]
    fn test_no_heading_means_no_title() {
        let html = r#"<div class="td-post-content tagdiv-type"><p>Only body.</p></div>"#;
        let text = extractor().extract(html, URL).unwrap();
        assert_eq!(text, "Only body.");
    }

    #[test]
    fn test_empty_container_is_not_an_error() {
        let html = r#"<div class="td-post-content tagdiv-type"></div>"#;
        assert_eq!(extractor().extract(html, URL).unwrap(), "");

        let text = extractor().extract(&page(""), URL).unwrap();
        assert_eq!(text, "Rising Markets");
    }

    #[test]
    fn test_missing_container_fails() {
        let html = "<html><body><h1>Title</h1><p>Loose text</p></body></html>";
        let err = extractor().extract(html, URL).unwrap_err();
        match err {
            ArticleError::MissingContainer { url, selector } => {
                assert_eq!(url, URL);
                assert_eq!(selector, "div.td-post-content.tagdiv-type");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_items_are_prefixed() {
        let html = page("<p>Intro.</p><ul><li>Alpha</li><li>Beta <i>two</i></li></ul>");
        let text = extractor().extract(&html, URL).unwrap();
        assert!(text.contains("- Alpha\n\n- Beta two"), "{text:?}");
    }

    #[test]
    fn test_list_item_seen_earlier_in_text_is_skipped() {
        // "Growth" is a substring of the earlier paragraph.
        let html = page("<p>Growth is strong.</p><ol><li>Growth</li><li>Risk</li></ol>");
        let text = extractor().extract(&html, URL).unwrap();
        assert!(!text.contains("- Growth"), "{text:?}");
        assert!(text.contains("- Risk"));
    }

    #[test]
    fn test_list_dedup_spans_lists() {
        let html = page("<ul><li>Shared</li></ul><ul><li>Shared</li><li>New</li></ul>");
        let text = extractor().extract(&html, URL).unwrap();
        assert_eq!(text.matches("- Shared").count(), 1);
        assert!(text.contains("- New"));
    }

    #[test]
    fn test_duplicate_lines_removed() {
        let html = page("<p>Repeat me.</p><p>Other.</p><p>Repeat me.</p>");
        let text = extractor().extract(&html, URL).unwrap();
        assert_eq!(text.matches("Repeat me.").count(), 1);
        assert_unique_lines(&text);
    }

    #[test]
    fn test_heading_inside_container_not_repeated_after_title() {
        let html = r#"<h1>Rising Markets</h1>
            <div class="td-post-content tagdiv-type"><h1>Rising Markets</h1><p>Body.</p></div>"#;
        let text = extractor().extract(html, URL).unwrap();
        assert_eq!(text, "Rising Markets\n\nBody.");
    }

    #[test]
    fn test_repeated_title_lines_collapse() {
        let html = "<h1>Breaking\nBreaking</h1>\
            <div class=\"td-post-content tagdiv-type\"><p>Body.</p></div>";
        let text = extractor().extract(html, URL).unwrap();
        assert_eq!(text, "Breaking\n\nBody.");
        assert_unique_lines(&text);
    }

    #[test]
    fn test_repeated_title_lines_without_body() {
        let html = "<h1>Breaking\n\nBreaking\nNews</h1>\
            <div class=\"td-post-content tagdiv-type\"></div>";
        let text = extractor().extract(html, URL).unwrap();
        assert_eq!(text, "Breaking\nNews");
    }

    #[test]
    fn test_content_outside_container_ignored() {
        let text = extractor().extract(&page("<p>Inside.</p>"), URL).unwrap();
        assert!(!text.contains("Footer text"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = page("<p>A.</p><ul><li>B</li></ul><p>A.</p>");
        let first = extractor().extract(&html, URL).unwrap();
        let second = extractor().extract(&html, URL).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unique_lines_invariant_on_messy_markup() {
        let html = page(
            "<p>x</p><p>x</p><ul><li>x</li><li>y<ul><li>z</li></ul></li></ul>\
             <ol><li>z</li><li>w</li></ol><p>y z</p><p></p><p></p>",
        );
        let text = extractor().extract(&html, URL).unwrap();
        assert_unique_lines(&text);
    }

    #[test]
    fn test_custom_container_selector() {
        let config = ScrapeConfig::default().with_overrides(Some("article.story"), None);
        let extractor = ArticleExtractor::new(&config).unwrap();
        let html = r#"<article class="story"><p>Story text.</p></article>"#;
        assert_eq!(extractor.extract(html, URL).unwrap(), "Story text.");
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let config = ScrapeConfig::default().with_overrides(Some("div[["), None);
        let err = ArticleExtractor::new(&config).unwrap_err();
        assert!(matches!(err, ArticleError::InvalidSelector { .. }));
    }
}
