//! Word and sentence tokenization.
//!
//! Word tokens follow Unicode (UAX #29) word boundaries with a few
//! Treebank-style adjustments:
//! - punctuation is kept as separate tokens (`"Hello, world."` gives
//!   `Hello`, `,`, `world`, `.`)
//! - hyphenated compounds stay whole (`well-known`)
//! - runs of periods collapse into one token (`...`)
//! - contractions split off their clitic (`don't` gives `do`, `n't`)
//!
//! Sentences follow UAX #29 sentence boundaries within each line. A line
//! break ends a sentence only when the text before it ends in terminal
//! punctuation, so a heading runs into the paragraph below it. A boundary
//! right after a common abbreviation (`Mr.`, `Dr.`, `e.g.`) or a single-letter
//! initial is ignored. Only sentences containing at least one alphanumeric
//! character are counted.

use crate::lexicon::LexiconSet;
use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];
const CLITICS_CURLY: &[&str] = &["n\u{2019}t", "\u{2019}s", "\u{2019}re", "\u{2019}ve", "\u{2019}ll", "\u{2019}d", "\u{2019}m"];

/// Lowercased, without the final period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "gen", "gov", "sen", "rep", "rev",
    "inc", "ltd", "corp", "co", "dept", "approx", "e.g", "i.e", "u.s", "u.k", "jan", "feb", "mar",
    "apr", "aug", "sept", "oct", "nov", "dec",
];

fn is_word_like(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn is_whitespace(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}

/// Split `text` into word and punctuation tokens, in order of appearance.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut merged: Vec<String> = Vec::with_capacity(segments.len());
    // Whether the previous segment was directly adjacent (no whitespace in between).
    let mut adjacent = false;

    for (i, segment) in segments.iter().enumerate() {
        if is_whitespace(segment) {
            adjacent = false;
            continue;
        }

        let next_is_word = segments.get(i + 1).is_some_and(|s| is_word_like(s));
        let joins_compound = *segment == "-"
            && adjacent
            && next_is_word
            && merged.last().is_some_and(|t| is_word_like(t));
        let continues_compound = adjacent
            && is_word_like(segment)
            && merged.last().is_some_and(|t| t.ends_with('-') && t.len() > 1);
        let continues_ellipsis =
            *segment == "." && adjacent && merged.last().is_some_and(|t| t.chars().all(|c| c == '.'));

        if joins_compound || continues_compound || continues_ellipsis {
            if let Some(last) = merged.last_mut() {
                last.push_str(segment);
            }
        } else {
            merged.push(segment.to_string());
        }
        adjacent = true;
    }

    merged.into_iter().flat_map(split_contraction).collect()
}

/// `"don't"` becomes `["do", "n't"]`; other tokens pass through unchanged.
fn split_contraction(token: String) -> Vec<String> {
    let lower = token.to_lowercase();
    for clitic in CLITICS.iter().chain(CLITICS_CURLY) {
        if lower.ends_with(clitic) && token.len() > clitic.len() {
            let at = token.len() - clitic.len();
            if token.is_char_boundary(at) {
                let (stem, tail) = token.split_at(at);
                return vec![stem.to_string(), tail.to_string()];
            }
        }
    }
    vec![token]
}

/// Sentences of `text` with whitespace collapsed, in order of appearance.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut glue = false;

    for line in text.lines() {
        let line = line.split_whitespace().join(" ");
        for segment in line.split_sentence_bounds().map(str::trim).filter(|s| !s.is_empty()) {
            if glue {
                if let Some(last) = out.last_mut() {
                    last.push(' ');
                    last.push_str(segment);
                }
            } else {
                out.push(segment.to_string());
            }
            glue = out
                .last()
                .is_some_and(|s| !ends_with_terminal(s) || ends_with_abbreviation(s));
        }
    }

    out.into_iter().filter(|s| is_word_like(s)).collect()
}

/// Number of sentences in `text`.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).len()
}

fn ends_with_terminal(sentence: &str) -> bool {
    sentence
        .trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}'])
        .ends_with(['.', '?', '!', '\u{2026}'])
}

fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(stem) = sentence.strip_suffix('.') else {
        return false;
    };
    let last = stem.rsplit(' ').next().unwrap_or_default().to_lowercase();
    let mut chars = last.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    initial || ABBREVIATIONS.contains(&last.as_str())
}

/// True when every character is a letter or digit.
pub fn is_alnum(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Content words of `text`: alphanumeric tokens that are not stopwords,
/// with their original casing.
pub fn clean_text(text: &str, lexicon: &LexiconSet) -> Vec<String> {
    word_tokenize(text)
        .into_iter()
        .filter(|token| is_alnum(token) && !lexicon.is_stopword(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconSet {
        LexiconSet::new(
            ["the", "is", "a", "and", "i", "we", "are", "this"],
            Vec::<&str>::new(),
            Vec::<&str>::new(),
        )
    }

    #[test]
    fn test_punctuation_is_separate() {
        assert_eq!(
            word_tokenize("Hello, world."),
            vec!["Hello", ",", "world", "."]
        );
    }

    #[test]
    fn test_contractions_split() {
        assert_eq!(word_tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(word_tokenize("It's here"), vec!["It", "'s", "here"]);
        assert_eq!(word_tokenize("we\u{2019}ll go"), vec!["we", "\u{2019}ll", "go"]);
    }

    #[test]
    fn test_hyphenated_compound_stays_whole() {
        assert_eq!(
            word_tokenize("a well-known fact"),
            vec!["a", "well-known", "fact"]
        );
        assert_eq!(word_tokenize("state-of-the-art"), vec!["state-of-the-art"]);
        assert_eq!(word_tokenize("pause - then"), vec!["pause", "-", "then"]);
    }

    #[test]
    fn test_ellipsis_collapses() {
        assert_eq!(word_tokenize("Wait... now"), vec!["Wait", "...", "now"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(word_tokenize("").is_empty());
        assert!(word_tokenize("   \n\n ").is_empty());
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("I love this. We are happy."), 2);
        assert_eq!(sentence_count("One sentence only"), 1);
        assert_eq!(sentence_count("Is it? Yes! Done."), 3);
    }

    #[test]
    fn test_line_breaks_do_not_end_sentences() {
        assert_eq!(sentence_count("Rising Markets\n\nFirst paragraph. Second one."), 2);
        assert_eq!(sentence_count("Intro.\n\n- Alpha\n\n- Beta two\n\n- Gamma"), 2);
        assert_eq!(sentence_count("Title\n\nOne. Two."), 2);
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        assert_eq!(sentence_count("Mr. Smith went home. He slept."), 2);
        assert_eq!(sentence_count("Dr. Rao met J. Doe. They talked."), 2);
        assert_eq!(sentence_count("Costs rose, e.g. Fuel. Then fell."), 2);
    }

    #[test]
    fn test_sentences_from_extracted_article() {
        let text = "Rising Markets\n\nFirst paragraph.\n\n\n\nSecond one.\n\n- Alpha\n\n- Beta two";
        assert_eq!(
            sentences(text),
            vec![
                "Rising Markets First paragraph.",
                "Second one.",
                "- Alpha - Beta two",
            ]
        );
    }

    #[test]
    fn test_is_alnum() {
        assert!(is_alnum("word"));
        assert!(is_alnum("2024"));
        assert!(is_alnum("Café"));
        assert!(!is_alnum("n't"));
        assert!(!is_alnum("well-known"));
        assert!(!is_alnum("3.5"));
        assert!(!is_alnum(""));
    }

    #[test]
    fn test_clean_text_filters_stopwords_and_punctuation() {
        let words = clean_text("The Market is booming, and THE outlook is bright!", &lexicon());
        assert_eq!(words, vec!["Market", "booming", "outlook", "bright"]);
    }

    #[test]
    fn test_clean_text_keeps_original_case() {
        let words = clean_text("Excellent results", &lexicon());
        assert_eq!(words, vec!["Excellent", "results"]);
    }

    #[test]
    fn test_clean_text_output_invariants() {
        let lexicon = lexicon();
        let text = "I can't believe it's 3.5% better -- the well-known A/B test... We are happy!";
        for word in clean_text(text, &lexicon) {
            assert!(is_alnum(&word), "{word}");
            assert!(!lexicon.is_stopword(&word), "{word}");
        }
    }

    #[test]
    fn test_clean_text_empty() {
        assert!(clean_text("", &lexicon()).is_empty());
    }
}
