//! Core trait definitions

use crate::error::SeoscopeResult;
use async_trait::async_trait;

/// Something that turns an SEO prompt into improvement suggestions
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Produce suggestions text for the prompt
    async fn suggest(&self, prompt: &str) -> SeoscopeResult<String>;
}
