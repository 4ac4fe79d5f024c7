//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Average sentence length (in words) up to which text counts as easy
pub const DEFAULT_EASY_MAX: f64 = 14.0;
/// Average sentence length (in words) up to which text counts as moderate
pub const DEFAULT_MODERATE_MAX: f64 = 20.0;
/// Sentences with more words than this are reported as long
pub const DEFAULT_LONG_SENTENCE_WORDS: usize = 20;
/// Number of keywords shown in the report
pub const DEFAULT_TOP_KEYWORDS: usize = 8;
/// Number of keywords placed in the LLM summary
pub const DEFAULT_SUMMARY_KEYWORDS: usize = 5;

/// Common function words left out of keyword frequency
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "a", "of", "that", "it", "on", "for", "with", "as", "this",
    "are", "an", "be", "by", "or", "we", "your", "you",
];

/// Readability estimate derived from average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }

    /// Short hint shown next to the label in the report
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Difficulty::Easy => Some("good for general audiences"),
            Difficulty::Moderate => None,
            Difficulty::Hard => Some("consider shortening sentences"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.advice() {
            Some(advice) => write!(f, "{} ({})", self.label(), advice),
            None => f.write_str(self.label()),
        }
    }
}

/// One row of the keyword frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Metrics computed for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    pub long_sentence_count: usize,
    pub difficulty: Difficulty,
    /// Ordered by descending count, ties in first-seen order
    pub keywords: Vec<KeywordCount>,
}

impl MetricsRecord {
    /// Record for a blank document
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            average_sentence_length: 0.0,
            long_sentence_count: 0,
            difficulty: Difficulty::Easy,
            keywords: Vec::new(),
        }
    }

    /// Average sentence length rounded to one decimal, as displayed
    pub fn rounded_average(&self) -> f64 {
        (self.average_sentence_length * 10.0).round() / 10.0
    }

    pub fn top_keywords(&self, n: usize) -> &[KeywordCount] {
        &self.keywords[..n.min(self.keywords.len())]
    }
}

/// Cutoffs used to classify average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyThresholds {
    /// Averages at or below this are easy
    pub easy_max: f64,
    /// Averages at or below this (and above `easy_max`) are moderate
    pub moderate_max: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            easy_max: DEFAULT_EASY_MAX,
            moderate_max: DEFAULT_MODERATE_MAX,
        }
    }
}

/// Settings for the text metrics calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub stopwords: Vec<String>,
    /// Sentences with more words than this count as long
    pub long_sentence_words: usize,
    pub difficulty: DifficultyThresholds,
    pub top_keywords: usize,
    pub summary_keywords: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            long_sentence_words: DEFAULT_LONG_SENTENCE_WORDS,
            difficulty: DifficultyThresholds::default(),
            top_keywords: DEFAULT_TOP_KEYWORDS,
            summary_keywords: DEFAULT_SUMMARY_KEYWORDS,
        }
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type (openai, anthropic, groq, ollama)
    pub provider: String,
    /// Model name
    pub model: String,
    /// API key (optional, can be set via environment)
    pub api_key: Option<String>,
    /// Base URL for custom endpoints
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound for one suggestions request
    pub timeout_secs: u64,
    /// Always use the canned suggestions
    pub mock: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.7,
            max_tokens: 300,
            timeout_secs: 60,
            mock: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoscopeConfig {
    pub analysis: AnalysisConfig,
    pub llm: LlmConfig,
}

/// Where a suggestions text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Live,
    Mock,
    Fallback,
}

/// Suggestions returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub text: String,
    pub source: SuggestionSource,
}
