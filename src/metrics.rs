//! Readability and sentiment metrics.
//!
//! Every function here is pure. Inputs are the cleaned content words of an
//! article (see [`clean_text`](crate::nlp::clean_text)) and/or its raw
//! extracted text. Functions that divide by the number of words or sentences
//! return [`ArticleError::DivideByZero`] instead of producing `NaN`/`inf`.
//!
//! # Rounding
//!
//! | Metric | Decimals |
//! |---|---|
//! | polarity, subjectivity | 3 |
//! | avg sentence length, fog index, syllables per word, avg word length | 2 |
//! | percentage of complex words | 4 |
//!
//! The fog index is computed from the already-rounded sentence length and
//! complex-word percentage.

use crate::error::{ArticleError, Result};
use crate::lexicon::LexiconSet;
use crate::models::ArticleMetrics;
use crate::nlp::syllables::is_complex;
use crate::nlp::{clean_text, count_syllables, sentence_count, word_tokenize};
use once_cell::sync::Lazy;
use regex::Regex;

const EPSILON: f64 = 0.000001;

static PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").expect("pronoun pattern is valid"));

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn positive_score(words: &[String], lexicon: &LexiconSet) -> u64 {
    words.iter().filter(|w| lexicon.is_positive(w)).count() as u64
}

pub fn negative_score(words: &[String], lexicon: &LexiconSet) -> u64 {
    words.iter().filter(|w| lexicon.is_negative(w)).count() as u64
}

/// `(pos - neg) / (pos + neg + 1e-6)`, in `[-1, 1]`.
pub fn polarity_score(positive: u64, negative: u64) -> f64 {
    let (pos, neg) = (positive as f64, negative as f64);
    round_to((pos - neg) / ((pos + neg) + EPSILON), 3)
}

/// `(pos + neg) / (total_words + 1e-6)`.
pub fn subjectivity_score(positive: u64, negative: u64, total_words: usize) -> f64 {
    let (pos, neg) = (positive as f64, negative as f64);
    round_to((pos + neg) / (total_words as f64 + EPSILON), 3)
}

/// All tokens of the raw text (punctuation included) per sentence.
pub fn average_sentence_length(text: &str) -> Result<f64> {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return Err(ArticleError::DivideByZero {
            metric: "average sentence length",
            what: "sentences",
        });
    }
    let total_words = word_tokenize(text).len();
    Ok(round_to(total_words as f64 / sentences as f64, 2))
}

pub fn complex_word_count(words: &[String]) -> u64 {
    words.iter().filter(|w| is_complex(w)).count() as u64
}

pub fn percentage_complex_words(words: &[String]) -> Result<f64> {
    let total = non_empty(words, "percentage of complex words")?;
    let complex = complex_word_count(words) as f64;
    Ok(round_to(complex / total * 100.0, 4))
}

/// `0.4 * (avg_sentence_length + percentage_complex_words)`.
pub fn fog_index(average_sentence_length: f64, percentage_complex_words: f64) -> f64 {
    round_to(0.4 * (average_sentence_length + percentage_complex_words), 2)
}

pub fn syllables_per_word(words: &[String]) -> Result<f64> {
    let total = non_empty(words, "syllables per word")?;
    let syllables: u64 = words.iter().map(|w| u64::from(count_syllables(w))).sum();
    Ok(round_to(syllables as f64 / total, 2))
}

/// Whole-word, case-insensitive matches of I, we, my, ours, us.
pub fn personal_pronouns(text: &str) -> u64 {
    PRONOUN_RE.find_iter(text).count() as u64
}

/// Mean length of the content words, in characters.
pub fn average_word_length(words: &[String]) -> Result<f64> {
    let total = non_empty(words, "average word length")?;
    let chars: usize = words.iter().map(|w| w.chars().count()).sum();
    Ok(round_to(chars as f64 / total, 2))
}

fn non_empty(words: &[String], metric: &'static str) -> Result<f64> {
    if words.is_empty() {
        return Err(ArticleError::DivideByZero {
            metric,
            what: "content words",
        });
    }
    Ok(words.len() as f64)
}

/// Compute every metric for one article's extracted text.
pub fn analyze(text: &str, lexicon: &LexiconSet) -> Result<ArticleMetrics> {
    let words = clean_text(text, lexicon);
    score(&words, text, lexicon)
}

/// Compute every metric from already-cleaned words and the raw text they came from.
pub fn score(words: &[String], text: &str, lexicon: &LexiconSet) -> Result<ArticleMetrics> {
    let positive = positive_score(words, lexicon);
    let negative = negative_score(words, lexicon);
    let avg_sentence_length = average_sentence_length(text)?;
    let pct_complex = percentage_complex_words(words)?;

    Ok(ArticleMetrics {
        positive_score: positive,
        negative_score: negative,
        polarity_score: polarity_score(positive, negative),
        subjectivity_score: subjectivity_score(positive, negative, words.len()),
        avg_sentence_length,
        percentage_complex_words: pct_complex,
        fog_index: fog_index(avg_sentence_length, pct_complex),
        complex_word_count: complex_word_count(words),
        word_count: words.len() as u64,
        syllable_per_word: syllables_per_word(words)?,
        personal_pronouns: personal_pronouns(text),
        avg_word_length: average_word_length(words)?,
    })
}
