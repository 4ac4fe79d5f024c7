//! Prompts for SEO suggestions

use seoscope_core::MetricsRecord;

/// System prompt sent ahead of every suggestions request
pub const SYSTEM_PROMPT: &str = "You are a helpful SEO assistant.";

const INSTRUCTIONS: &str = "You are an SEO assistant. Given the content summary below, provide clear, \
actionable suggestions to improve on-page SEO, keyword usage, headings, \
meta description ideas, and readability. Keep the suggestions concise and \
beginner-friendly.";

/// One-paragraph summary of the metrics handed to the model
pub fn build_summary(record: &MetricsRecord, summary_keywords: usize) -> String {
    let keywords = record
        .top_keywords(summary_keywords)
        .iter()
        .map(|k| k.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Word count: {}. Top keywords: {}. Average sentence length: {:.1}. Long sentences: {}.",
        record.word_count,
        keywords,
        record.rounded_average(),
        record.long_sentence_count
    )
}

/// Wrap a summary in the suggestions request
pub fn build_prompt(summary: &str) -> String {
    format!(
        "{}\n\nContent summary:\n{}\n\nReturn suggestions as bullet points.",
        INSTRUCTIONS, summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoscope_core::{Difficulty, KeywordCount};

    fn record() -> MetricsRecord {
        MetricsRecord {
            word_count: 120,
            sentence_count: 9,
            average_sentence_length: 120.0 / 9.0,
            long_sentence_count: 2,
            difficulty: Difficulty::Easy,
            keywords: ["seo", "content", "links"]
                .iter()
                .map(|w| KeywordCount {
                    word: w.to_string(),
                    count: 3,
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            build_summary(&record(), 2),
            "Word count: 120. Top keywords: seo, content. Average sentence length: 13.3. Long sentences: 2."
        );
    }

    #[test]
    fn test_summary_of_empty_record() {
        assert_eq!(
            build_summary(&MetricsRecord::empty(), 5),
            "Word count: 0. Top keywords: . Average sentence length: 0.0. Long sentences: 0."
        );
    }

    #[test]
    fn test_prompt_wraps_summary() {
        let prompt = build_prompt("Word count: 3.");
        assert!(prompt.starts_with("You are an SEO assistant."));
        assert!(prompt.contains("meta description ideas, and readability."));
        assert!(prompt.contains("Content summary:\nWord count: 3.\n\n"));
        assert!(prompt.ends_with("Return suggestions as bullet points."));
    }
}
