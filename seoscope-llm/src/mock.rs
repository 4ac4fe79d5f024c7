//! Canned suggestions for offline runs

use async_trait::async_trait;
use seoscope_core::{SeoscopeResult, SuggestionProvider};

/// Suggestions returned when no live model is used
pub const MOCK_SUGGESTIONS: &str = "- Use a clear H1 that includes your main keyword.\n\
- Add a short meta description (140-160 chars) containing the keyword.\n\
- Use the top 3 keywords naturally in the first 100 words.\n\
- Break long paragraphs into smaller ones (2-3 sentences each).\n\
- Add subheadings (H2/H3) to organize content and include related keywords.\n\
- Include internal links to related pages and at least one external reference.";

/// Returns a fixed text for every prompt
#[derive(Debug, Clone)]
pub struct MockSuggestionProvider {
    text: String,
}

impl MockSuggestionProvider {
    pub fn new() -> Self {
        Self::with_text(MOCK_SUGGESTIONS)
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for MockSuggestionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionProvider for MockSuggestionProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn suggest(&self, _prompt: &str) -> SeoscopeResult<String> {
        Ok(self.text.clone())
    }
}
