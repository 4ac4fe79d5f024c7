//! Keyword frequency table

use crate::stopwords::StopwordSet;
use seoscope_core::KeywordCount;
use std::collections::HashMap;

/// Occurrence counts of non-stopword keywords, remembering first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequency {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl KeywordFrequency {
    fn record(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All keywords by descending count; equal counts keep first-seen order
    pub fn ranked(&self) -> Vec<KeywordCount> {
        let mut ranked: Vec<KeywordCount> = self
            .order
            .iter()
            .map(|word| KeywordCount {
                word: word.clone(),
                count: self.counts[word],
            })
            .collect();
        // stable sort keeps first-seen order among ties
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// Reduce a word token to the key used in the frequency table
pub(crate) fn keyword_key(word: &str) -> String {
    // lowercase first: some lowercase mappings add combining marks
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Count every word that is not a stopword.
///
/// Keys keep only alphabetic characters, so `"it's"` counts as `"its"` and
/// purely numeric tokens are skipped.
pub fn compute_keyword_frequency<S: AsRef<str>>(
    words: &[S],
    stopwords: &StopwordSet,
) -> KeywordFrequency {
    let mut frequency = KeywordFrequency::default();

    for word in words {
        let key = keyword_key(word.as_ref());
        if key.is_empty() || stopwords.contains(&key) {
            continue;
        }
        frequency.record(key);
    }

    frequency
}
