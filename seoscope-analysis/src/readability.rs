//! Sentence-length readability heuristic

use crate::tokenizer::count_words;
use seoscope_core::{Difficulty, DifficultyThresholds};

/// Classify an average sentence length. Larger averages never map to an easier level.
pub fn classify_difficulty(avg_sentence_length: f64, thresholds: &DifficultyThresholds) -> Difficulty {
    if avg_sentence_length <= thresholds.easy_max {
        Difficulty::Easy
    } else if avg_sentence_length <= thresholds.moderate_max {
        Difficulty::Moderate
    } else {
        Difficulty::Hard
    }
}

/// Words per sentence; zero when there are no sentences
pub fn average_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return 0.0;
    }
    word_count as f64 / sentence_count as f64
}

/// Sentences with more than `max_words` words
pub fn count_long_sentences<S: AsRef<str>>(sentences: &[S], max_words: usize) -> usize {
    sentences
        .iter()
        .filter(|sentence| count_words(sentence.as_ref()) > max_words)
        .count()
}
