//! Seoscope Analysis - Text metrics for SEO reports
//!
//! Word and sentence tokenization, keyword frequency, and a sentence-length
//! readability heuristic. Everything here is a pure function of the input text
//! and an immutable [`AnalysisConfig`](seoscope_core::AnalysisConfig).

pub mod analyzer;
pub mod keywords;
pub mod readability;
pub mod stopwords;
pub mod tokenizer;

pub use analyzer::*;
pub use keywords::*;
pub use readability::*;
pub use stopwords::*;
pub use tokenizer::*;
