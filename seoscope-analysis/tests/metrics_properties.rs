//! Properties that must hold for every document the analyzer sees

use seoscope_analysis::{analyze, tokenize_words, StopwordSet, TextAnalyzer};
use seoscope_core::{AnalysisConfig, Difficulty};

const ARTICLE: &str = "Search engine optimization helps readers find your content. \
    Good content answers a question clearly! Do your headings describe each section? \
    Short paragraphs, descriptive links, and a focused keyword keep an article readable \
    for people who skim on small screens while waiting for a train or standing in line at a shop. \
    Content wins.";

fn corpus() -> Vec<String> {
    vec![
        ARTICLE.to_string(),
        "One.".to_string(),
        "no terminal punctuation at all".to_string(),
        "   leading and trailing whitespace   ".to_string(),
        "!!! ??? ...".to_string(),
        "Numbers 1, 2, and 3.5 count as words. So does café.".to_string(),
        "Line one\nLine two\n\nLine three.".to_string(),
        "“Quoted” text — with dashes – and ellipses… really?".to_string(),
    ]
}

#[test]
fn non_empty_documents_have_a_sentence() {
    for text in corpus() {
        let record = analyze(&text);
        assert!(record.sentence_count >= 1, "no sentences for {:?}", text);
    }
}

#[test]
fn word_count_matches_tokenizer_and_whitespace_bound() {
    for text in corpus() {
        let record = analyze(&text);
        let tokens = tokenize_words(&text);
        assert_eq!(record.word_count, tokens.len());
        assert!(record.word_count <= text.split_whitespace().count());
    }
}

#[test]
fn keyword_table_never_contains_stopwords() {
    let stopwords = StopwordSet::default();
    for text in corpus() {
        for entry in analyze(&text).keywords {
            assert!(!stopwords.contains(&entry.word), "stopword {:?}", entry.word);
            assert!(entry.word.chars().all(char::is_alphabetic));
            assert_eq!(entry.word, entry.word.to_lowercase());
            assert!(entry.count >= 1);
        }
    }
}

#[test]
fn keyword_table_is_sorted_by_count() {
    let record = analyze(ARTICLE);
    assert!(record
        .keywords
        .windows(2)
        .all(|pair| pair[0].count >= pair[1].count));
    assert_eq!(record.keywords[0].word, "content");
    assert_eq!(record.keywords[0].count, 3);
}

#[test]
fn analyze_is_idempotent() {
    let analyzer = TextAnalyzer::new(AnalysisConfig::default());
    for text in corpus() {
        assert_eq!(analyzer.analyze(&text), analyzer.analyze(&text));
    }
}

#[test]
fn article_metrics() {
    let record = analyze(ARTICLE);

    assert_eq!(record.word_count, 53);
    assert_eq!(record.sentence_count, 5);
    assert_eq!(record.long_sentence_count, 1);
    assert_eq!(record.average_sentence_length, 10.6);
    assert_eq!(record.difficulty, Difficulty::Easy);
}

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(TextAnalyzer::default());
    let handles: Vec<_> = corpus()
        .into_iter()
        .map(|text| {
            let analyzer = std::sync::Arc::clone(&analyzer);
            std::thread::spawn(move || (analyzer.analyze(&text), text))
        })
        .collect();

    for handle in handles {
        let (record, text) = handle.join().unwrap();
        assert_eq!(record, analyze(&text));
    }
}

#[test]
fn record_serializes_to_json() {
    let record = analyze("Short sentence. Another one here.");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["word_count"], 5);
    assert_eq!(json["sentence_count"], 2);
    assert_eq!(json["difficulty"], "Easy");
    assert_eq!(json["keywords"][0]["word"], "short");
}
