//! Natural language processing components
//!
//! This module provides tokenization, stopword cleaning and syllable counting.

pub mod syllables;
pub mod tokenizer;

pub use syllables::count_syllables;
pub use tokenizer::{clean_text, sentence_count, word_tokenize};
