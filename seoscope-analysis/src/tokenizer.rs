//! Word and sentence tokenization

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern is valid"));

/// Split on whitespace, strip surrounding punctuation and lowercase each token.
///
/// Tokens that are all punctuation disappear, so the result never has more
/// entries than the text has whitespace-separated substrings.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Number of tokens [`tokenize_words`] would produce, without allocating them
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|raw| raw.chars().any(char::is_alphanumeric))
        .count()
}

/// Split on runs of `.`, `!` and `?`, trimming and dropping empty segments.
///
/// Non-blank text always yields at least one sentence: text made only of
/// terminators becomes a single sentence holding the trimmed text.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let sentences: Vec<String> = SENTENCE_TERMINATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if sentences.is_empty() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return vec![trimmed.to_string()];
        }
    }

    sentences
}
