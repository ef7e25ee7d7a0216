//! Stopword and sentiment lexicons.
//!
//! A [`LexiconSet`] is built once at startup and only read afterwards; the
//! pipeline borrows it for every article.
//!
//! # Directory layout
//!
//! ```text
//! lexicon_dir/
//! ├── StopWords/
//! │   ├── StopWords_Generic.txt
//! │   └── StopWords_Names.txt      # "SMITH | Surnames from 1990 census"
//! └── MasterDictionary/
//!     ├── positive-words.txt
//!     └── negative-words.txt
//! ```
//!
//! Stopwords are NLTK's English list plus every token in `StopWords/`.
//! Sentiment words are read one per line; lines that are stopwords are dropped.

use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use stop_words::{LANGUAGE, get};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// How tokens are compared against the positive and negative word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexiconMatch {
    /// Token must equal the lexicon entry byte for byte, so `Excellent`
    /// does not match `excellent`. Historical reports were scored this way.
    #[default]
    Exact,
    /// Both sides are lowercased before comparison.
    CaseInsensitive,
}

/// Read-only word sets shared by every article in a run.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    /// Lowercase stopwords.
    stopwords: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    matching: LexiconMatch,
}

impl LexiconSet {
    /// Build a lexicon from in-memory word lists.
    ///
    /// Stopwords are lowercased. Sentiment words that are stopwords are skipped.
    pub fn new<S, P, N>(stopwords: S, positive: P, negative: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let stopwords: HashSet<String> = stopwords
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        let positive = sentiment_set(positive, &stopwords);
        let negative = sentiment_set(negative, &stopwords);
        Self {
            stopwords,
            positive,
            negative,
            matching: LexiconMatch::Exact,
        }
    }

    /// Switch the sentiment matching mode.
    pub fn with_matching(mut self, matching: LexiconMatch) -> Self {
        if matching == LexiconMatch::CaseInsensitive {
            self.positive = self.positive.iter().map(|w| w.to_lowercase()).collect();
            self.negative = self.negative.iter().map(|w| w.to_lowercase()).collect();
        }
        self.matching = matching;
        self
    }

    /// Load stopwords and sentiment lists from `dir`.
    #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
    pub async fn load(dir: &Path) -> Result<Self, Box<dyn Error>> {
        let mut stopwords: Vec<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_string())
            .collect();
        let builtin = stopwords.len();

        let stopwords_dir = dir.join("StopWords");
        let mut entries = fs::read_dir(&stopwords_dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        for path in &files {
            let text = read_lossy(path).await?;
            let before = stopwords.len();
            stopwords.extend(parse_stopword_file(&text));
            debug!(file = %path.display(), added = stopwords.len() - before, "Read stopword file");
        }
        if files.is_empty() {
            warn!(dir = %stopwords_dir.display(), "No stopword files found; using built-in list only");
        }

        let dictionary = dir.join("MasterDictionary");
        let positive = read_lossy(&dictionary.join("positive-words.txt")).await?;
        let negative = read_lossy(&dictionary.join("negative-words.txt")).await?;

        let lexicon = Self::new(
            stopwords,
            parse_word_list(&positive),
            parse_word_list(&negative),
        );
        info!(
            builtin_stopwords = builtin,
            stopwords = lexicon.stopwords.len(),
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Case-insensitive stopword membership.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.lookup(&self.positive, word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.lookup(&self.negative, word)
    }

    pub fn matching(&self) -> LexiconMatch {
        self.matching
    }

    fn lookup(&self, set: &HashSet<String>, word: &str) -> bool {
        match self.matching {
            LexiconMatch::Exact => set.contains(word),
            LexiconMatch::CaseInsensitive => set.contains(&word.to_lowercase()),
        }
    }
}

fn sentiment_set<I>(words: I, stopwords: &HashSet<String>) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .filter(|w| !w.is_empty() && !stopwords.contains(w))
        .collect()
}

/// Lexicon files are not reliably UTF-8; undecodable bytes are replaced.
async fn read_lossy(path: &Path) -> Result<String, Box<dyn Error>> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Tokens of a stopword file. Anything after `|` on a line is a comment.
fn parse_stopword_file(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(|line| line.split('|').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
}

/// One word per line; `;` starts a comment line in the opinion lexicon files.
fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with(';'))
        .map(str::to_string)
        .collect()
}
