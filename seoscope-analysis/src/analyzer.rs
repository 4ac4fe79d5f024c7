//! Text metrics calculator

use crate::keywords::compute_keyword_frequency;
use crate::readability::{average_sentence_length, classify_difficulty, count_long_sentences};
use crate::stopwords::StopwordSet;
use crate::tokenizer::{tokenize_sentences, tokenize_words};
use seoscope_core::{AnalysisConfig, MetricsRecord};
use tracing::debug;

/// Computes a [`MetricsRecord`] for a document using a fixed configuration.
///
/// Holds no mutable state, so one analyzer can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: AnalysisConfig,
    stopwords: StopwordSet,
}

impl TextAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        let stopwords = StopwordSet::new(&config.stopwords);
        Self { config, stopwords }
    }

    pub fn analyze(&self, text: &str) -> MetricsRecord {
        let words = tokenize_words(text);
        let sentences = tokenize_sentences(text);

        if words.is_empty() && sentences.is_empty() {
            debug!("Blank document, returning empty metrics");
            return MetricsRecord::empty();
        }

        let word_count = words.len();
        let sentence_count = sentences.len();
        let average = average_sentence_length(word_count, sentence_count);
        let long_sentence_count = count_long_sentences(&sentences, self.config.long_sentence_words);
        let difficulty = classify_difficulty(average, &self.config.difficulty);
        let keywords = compute_keyword_frequency(&words, &self.stopwords).ranked();

        debug!(
            word_count,
            sentence_count,
            long_sentence_count,
            distinct_keywords = keywords.len(),
            "Analyzed document"
        );

        MetricsRecord {
            word_count,
            sentence_count,
            average_sentence_length: average,
            long_sentence_count,
            difficulty,
            keywords,
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Analyze with the default stopwords and thresholds
pub fn analyze(text: &str) -> MetricsRecord {
    TextAnalyzer::default().analyze(text)
}
