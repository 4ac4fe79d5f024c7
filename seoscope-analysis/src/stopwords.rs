//! Stopword set used by keyword frequency

use crate::keywords::keyword_key;
use seoscope_core::DEFAULT_STOPWORDS;
use std::collections::HashSet;

/// Words excluded from keyword frequency, stored as keyword keys so that
/// `"Don't"` matches the key `dont`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| keyword_key(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&keyword_key(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}
