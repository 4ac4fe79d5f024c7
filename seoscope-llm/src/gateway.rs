//! Suggestion gateway
//!
//! Picks a live or mock provider from configuration and guarantees a
//! suggestions text: live failures and timeouts fall back to the canned text.

use crate::llm_client::{resolve_api_key, LiveSuggestionProvider};
use crate::mock::MockSuggestionProvider;
use seoscope_core::{
    performance, with_timeout, LlmConfig, SuggestionProvider, SuggestionSource, Suggestions,
};
use tracing::{info, warn};

const MOCK_TIMEOUT_MS: u64 = 1_000;

/// How the gateway should answer, decided before any client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderChoice {
    Mock { reason: &'static str },
    Live { api_key: Option<String> },
}

/// Decide between live and mock given an already resolved API key
pub fn choose_provider(
    config: &LlmConfig,
    force_mock: bool,
    api_key: Option<String>,
) -> ProviderChoice {
    if force_mock {
        return ProviderChoice::Mock {
            reason: "mock mode requested",
        };
    }
    if config.mock {
        return ProviderChoice::Mock {
            reason: "mock mode enabled in configuration",
        };
    }
    if crate::llm_client::api_key_env_var(&config.provider).is_some() && api_key.is_none() {
        return ProviderChoice::Mock {
            reason: "no API key configured",
        };
    }
    ProviderChoice::Live { api_key }
}

/// Front door for suggestions; never fails
pub struct SuggestionGateway {
    primary: Box<dyn SuggestionProvider>,
    primary_source: SuggestionSource,
    fallback: MockSuggestionProvider,
    timeout_ms: u64,
}

impl SuggestionGateway {
    /// Gateway around any provider; its answers are reported as live
    pub fn new(primary: Box<dyn SuggestionProvider>, timeout_ms: u64) -> Self {
        Self {
            primary,
            primary_source: SuggestionSource::Live,
            fallback: MockSuggestionProvider::new(),
            timeout_ms,
        }
    }

    /// Gateway that only ever returns the canned suggestions
    pub fn mock() -> Self {
        Self {
            primary: Box::new(MockSuggestionProvider::new()),
            primary_source: SuggestionSource::Mock,
            fallback: MockSuggestionProvider::new(),
            timeout_ms: MOCK_TIMEOUT_MS,
        }
    }

    pub fn with_fallback(mut self, fallback: MockSuggestionProvider) -> Self {
        self.fallback = fallback;
        self
    }

    /// Build from configuration, reading API keys from the environment
    pub async fn from_config(config: &LlmConfig, force_mock: bool) -> Self {
        let api_key = resolve_api_key(config, |var| std::env::var(var).ok());
        Self::from_choice(config, choose_provider(config, force_mock, api_key)).await
    }

    /// Build for a decided choice; a client that cannot be built degrades to mock
    pub async fn from_choice(config: &LlmConfig, choice: ProviderChoice) -> Self {
        match choice {
            ProviderChoice::Mock { reason } => {
                info!(reason, "Using mock suggestions");
                Self::mock()
            }
            ProviderChoice::Live { api_key } => {
                match LiveSuggestionProvider::new(config.clone(), api_key).await {
                    Ok(provider) => Self::new(
                        Box::new(provider),
                        config.timeout_secs.saturating_mul(1000),
                    ),
                    Err(e) => {
                        e.log();
                        warn!("Could not create LLM client, using mock suggestions");
                        Self::mock()
                    }
                }
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        self.primary_source == SuggestionSource::Mock
    }

    pub fn provider_name(&self) -> &str {
        self.primary.name()
    }

    /// Suggestions for the prompt, falling back to the canned text on any failure
    pub async fn suggest(&self, prompt: &str) -> Suggestions {
        let request = performance::measure_async("suggest", self.primary.suggest(prompt));

        match with_timeout(request, self.timeout_ms, "suggest").await {
            Ok(Ok(text)) => Suggestions {
                text,
                source: self.primary_source,
            },
            Ok(Err(e)) | Err(e) => {
                e.log();
                warn!(
                    provider = self.primary.name(),
                    "Suggestions request failed, using fallback text"
                );
                Suggestions {
                    text: self.fallback.text().to_string(),
                    source: SuggestionSource::Fallback,
                }
            }
        }
    }
}
