//! Console and JSON rendering of an analysis

use serde::Serialize;
use seoscope_core::{MetricsRecord, Suggestions};

/// Metrics section of the text report
pub fn render_metrics(record: &MetricsRecord, top_n: usize, long_sentence_words: usize) -> String {
    let mut out = format!(
        "--- Basic SEO Metrics ---\n\
         Word count: {}\n\
         Sentence count: {}\n\
         Average sentence length (words): {:.1}\n\
         Number of long sentences (>{} words): {}\n\
         Difficulty estimate: {}\n\
         \nTop keywords:\n",
        record.word_count,
        record.sentence_count,
        record.rounded_average(),
        long_sentence_words,
        record.long_sentence_count,
        record.difficulty,
    );

    let keywords = record.top_keywords(top_n);
    if keywords.is_empty() {
        out.push_str("(none)\n");
    }
    for (i, keyword) in keywords.iter().enumerate() {
        out.push_str(&format!("{}. {} — {}\n", i + 1, keyword.word, keyword.count));
    }

    out
}

/// Suggestions section of the text report
pub fn render_suggestions(suggestions: &Suggestions) -> String {
    format!("--- SEO Improvement Suggestions ---\n{}\n", suggestions.text)
}

/// Machine-readable report printed with `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: &'a str,
    pub metrics: MetricsRecord,
    pub suggestions: Option<&'a Suggestions>,
}

impl<'a> JsonReport<'a> {
    /// Report with the keyword table cut to `top_n` entries
    pub fn new(
        file: &'a str,
        record: &MetricsRecord,
        top_n: usize,
        suggestions: Option<&'a Suggestions>,
    ) -> Self {
        let mut metrics = record.clone();
        metrics.keywords.truncate(top_n);
        Self {
            file,
            metrics,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoscope_core::{Difficulty, KeywordCount, SuggestionSource};

    fn record() -> MetricsRecord {
        MetricsRecord {
            word_count: 5,
            sentence_count: 2,
            average_sentence_length: 2.5,
            long_sentence_count: 0,
            difficulty: Difficulty::Easy,
            keywords: vec![
                KeywordCount {
                    word: "short".to_string(),
                    count: 1,
                },
                KeywordCount {
                    word: "sentence".to_string(),
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_metrics_section() {
        let text = render_metrics(&record(), 1, 20);
        let expected = "--- Basic SEO Metrics ---\n\
Word count: 5\n\
Sentence count: 2\n\
Average sentence length (words): 2.5\n\
Number of long sentences (>20 words): 0\n\
Difficulty estimate: Easy (good for general audiences)\n\
\n\
Top keywords:\n\
1. short — 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_keyword_lines_are_numbered() {
        let text = render_metrics(&record(), 5, 25);
        assert!(text.contains("Number of long sentences (>25 words): 0\n"));
        assert!(text.ends_with("Top keywords:\n1. short — 1\n2. sentence — 1\n"));
    }

    #[test]
    fn test_no_keywords() {
        let text = render_metrics(&MetricsRecord::empty(), 8, 20);
        assert!(text.contains("Average sentence length (words): 0.0"));
        assert!(text.ends_with("Top keywords:\n(none)\n"));
    }

    #[test]
    fn test_suggestions_section() {
        let suggestions = Suggestions {
            text: "- one\n- two".to_string(),
            source: SuggestionSource::Mock,
        };
        assert_eq!(
            render_suggestions(&suggestions),
            "--- SEO Improvement Suggestions ---\n- one\n- two\n"
        );
    }

    #[test]
    fn test_json_report_truncates_keywords() {
        let suggestions = Suggestions {
            text: "- one".to_string(),
            source: SuggestionSource::Fallback,
        };
        let report = JsonReport::new("a.txt", &record(), 1, Some(&suggestions));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["file"], "a.txt");
        assert_eq!(json["metrics"]["keywords"].as_array().unwrap().len(), 1);
        assert_eq!(json["suggestions"]["source"], "fallback");
    }
}
