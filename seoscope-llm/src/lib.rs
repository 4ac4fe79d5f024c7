//! Seoscope LLM - SEO suggestions from a language model
//!
//! Builds the suggestions prompt from a metrics record and sends it to a
//! provider through the siumai framework, or returns canned suggestions when
//! running offline.

pub mod gateway;
pub mod llm_client;
pub mod mock;
pub mod prompts;

pub use gateway::*;
pub use llm_client::*;
pub use mock::*;
pub use prompts::*;

// Re-export the provider seam from core for convenience
pub use seoscope_core::{SuggestionProvider, SuggestionSource, Suggestions};
