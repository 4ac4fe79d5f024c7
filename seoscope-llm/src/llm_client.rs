//! Live suggestions through siumai
//!
//! Builds a siumai client for the configured provider and asks it for SEO
//! suggestions.

use crate::prompts::SYSTEM_PROMPT;
use async_trait::async_trait;
use seoscope_core::{
    config_error, llm_error, SeoscopeError, SeoscopeResult, LlmConfig, SuggestionProvider,
};
use siumai::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Environment variable holding the API key for a provider, if it needs one
pub fn api_key_env_var(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some("OPENAI_API_KEY"),
        "anthropic" => Some("ANTHROPIC_API_KEY"),
        "groq" => Some("GROQ_API_KEY"),
        _ => None,
    }
}

/// API key from the config, or else from `lookup` applied to the provider's variable
pub fn resolve_api_key<F>(config: &LlmConfig, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| api_key_env_var(&config.provider).and_then(lookup))
        .filter(|key| !key.trim().is_empty())
}

/// Sends prompts to a live model
pub struct LiveSuggestionProvider {
    client: Box<dyn LlmClient + Send + Sync>,
    config: LlmConfig,
}

impl LiveSuggestionProvider {
    /// Create a provider; `api_key` is required for every provider except ollama
    pub async fn new(config: LlmConfig, api_key: Option<String>) -> SeoscopeResult<Self> {
        let client = Self::build_client(&config, api_key).await?;

        info!(
            "Created LLM client for provider: {} with model: {}",
            config.provider, config.model
        );

        Ok(Self { client, config })
    }

    /// Build the appropriate siumai client based on configuration
    async fn build_client(
        config: &LlmConfig,
        api_key: Option<String>,
    ) -> SeoscopeResult<Box<dyn LlmClient + Send + Sync>> {
        let require_key = |provider: &str| {
            api_key
                .clone()
                .ok_or_else(|| config_error!(format!("{} API key not found", provider), "llm_client"))
        };

        match config.provider.as_str() {
            "openai" => {
                let mut builder = LlmBuilder::new()
                    .openai()
                    .api_key(&require_key("OpenAI")?)
                    .model(&config.model)
                    .temperature(config.temperature)
                    .max_tokens(config.max_tokens);

                if let Some(base_url) = &config.base_url {
                    builder = builder.base_url(base_url);
                }

                let client = builder.build().await.map_err(|e| build_failed(config, e))?;
                Ok(Box::new(client))
            }
            "anthropic" => {
                let client = LlmBuilder::new()
                    .anthropic()
                    .api_key(&require_key("Anthropic")?)
                    .model(&config.model)
                    .temperature(config.temperature)
                    .max_tokens(config.max_tokens)
                    .build()
                    .await
                    .map_err(|e| build_failed(config, e))?;

                Ok(Box::new(client))
            }
            "groq" => {
                let client = LlmBuilder::new()
                    .groq()
                    .api_key(&require_key("Groq")?)
                    .model(&config.model)
                    .temperature(config.temperature)
                    .max_tokens(config.max_tokens)
                    .build()
                    .await
                    .map_err(|e| build_failed(config, e))?;

                Ok(Box::new(client))
            }
            "ollama" => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:11434".to_string());

                let client = LlmBuilder::new()
                    .ollama()
                    .model(&config.model)
                    .base_url(&base_url)
                    .temperature(config.temperature)
                    .max_tokens(config.max_tokens)
                    .build()
                    .await
                    .map_err(|e| build_failed(config, e))?;

                Ok(Box::new(client))
            }
            provider => Err(config_error!(
                format!("Unsupported LLM provider: {}", provider),
                "llm_client"
            )),
        }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn failure(&self, message: String) -> SeoscopeError {
        llm_error!(message, self.config.provider, self.config.model, "llm_client")
    }
}

fn build_failed(config: &LlmConfig, e: impl std::fmt::Display) -> SeoscopeError {
    llm_error!(
        format!("Failed to build {} client: {}", config.provider, e),
        config.provider,
        config.model,
        "llm_client"
    )
}

#[async_trait]
impl SuggestionProvider for LiveSuggestionProvider {
    fn name(&self) -> &str {
        &self.config.provider
    }

    async fn suggest(&self, prompt: &str) -> SeoscopeResult<String> {
        let start_time = Instant::now();
        let messages = vec![system!(SYSTEM_PROMPT), user!(prompt)];

        debug!("Requesting suggestions from {}", self.config.provider);

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| self.failure(format!("LLM generation failed: {}", e)))?;

        let content = response
            .content_text()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| self.failure("No text content in LLM response".to_string()))?;

        info!(
            "Generated suggestions in {:?} ({} chars)",
            start_time.elapsed(),
            content.len()
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str, api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            api_key: api_key.map(str::to_string),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_env_vars() {
        assert_eq!(api_key_env_var("openai"), Some("OPENAI_API_KEY"));
        assert_eq!(api_key_env_var("anthropic"), Some("ANTHROPIC_API_KEY"));
        assert_eq!(api_key_env_var("groq"), Some("GROQ_API_KEY"));
        assert_eq!(api_key_env_var("ollama"), None);
    }

    #[test]
    fn test_config_key_wins() {
        let key = resolve_api_key(&config("openai", Some("sk-config")), |_| {
            Some("sk-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("sk-config"));
    }

    #[test]
    fn test_env_key_used_when_config_blank() {
        let key = resolve_api_key(&config("groq", Some("  ")), |var| {
            (var == "GROQ_API_KEY").then(|| "gsk-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("gsk-env"));
    }

    #[test]
    fn test_no_key() {
        assert_eq!(resolve_api_key(&config("openai", None), |_| None), None);
        assert_eq!(
            resolve_api_key(&config("openai", None), |_| Some(String::new())),
            None
        );
        assert_eq!(
            resolve_api_key(&config("ollama", None), |_| Some("x".to_string())),
            None
        );
    }

    #[tokio::test]
    async fn test_unsupported_provider() {
        let result = LiveSuggestionProvider::new(config("carrier-pigeon", None), None).await;
        match result {
            Err(SeoscopeError::Config { message, .. }) => {
                assert!(message.contains("Unsupported LLM provider"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let result = LiveSuggestionProvider::new(config("openai", None), None).await;
        assert!(matches!(result, Err(SeoscopeError::Config { .. })));
    }
}
