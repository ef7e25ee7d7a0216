//! Vowel-cluster syllable approximation.
//!
//! Not a phonetic lookup: a word gets one syllable per run of vowels
//! (`a e i o u`), minus one for an `-es`/`-ed` ending, and never fewer than one.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Approximate the number of syllables in `word`.
pub fn count_syllables(word: &str) -> u32 {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();

    let mut count: i64 = 0;
    if chars.first().copied().is_some_and(is_vowel) {
        count += 1;
    }
    for pair in chars.windows(2) {
        if is_vowel(pair[1]) && !is_vowel(pair[0]) {
            count += 1;
        }
    }
    if word.ends_with("es") || word.ends_with("ed") {
        count -= 1;
    }
    count.max(1) as u32
}

/// Words with more than two syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > 2
}
