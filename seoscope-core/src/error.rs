//! Unified error handling system
//!
//! Provides structured error types with context, recovery suggestions, and proper error chaining

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type SeoscopeResult<T> = Result<T, SeoscopeError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Additional metadata
    pub metadata: std::collections::HashMap<String, String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            metadata: std::collections::HashMap::new(),
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for seoscope
#[derive(Error, Debug)]
pub enum SeoscopeError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Resource not found: {resource}")]
    NotFound {
        resource: String,
        context: ErrorContext,
    },

    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        model: Option<String>,
        context: ErrorContext,
    },

    #[error("Operation timeout: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },
}

impl SeoscopeError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            SeoscopeError::Config { context, .. } => Some(context),
            SeoscopeError::Validation { context, .. } => Some(context),
            SeoscopeError::NotFound { context, .. } => Some(context),
            SeoscopeError::Llm { context, .. } => Some(context),
            SeoscopeError::Timeout { context, .. } => Some(context),
            SeoscopeError::Internal { context, .. } => Some(context),
            SeoscopeError::Io(_) | SeoscopeError::Serialization(_) => None,
        }
    }

    /// Whether the suggestion gateway can recover from this error by falling back
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SeoscopeError::Llm { .. } | SeoscopeError::Timeout { .. }
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SeoscopeError::Internal { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Internal error occurred"
                );
            }
            SeoscopeError::Config { .. } | SeoscopeError::Validation { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Configuration or validation error"
                );
            }
            SeoscopeError::Llm { .. } | SeoscopeError::Timeout { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "LLM or timeout error (falling back to canned suggestions)"
                );
            }
            _ => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Error occurred"
                );
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::SeoscopeError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file"),
        }
    };
    ($msg:expr, $component:expr, $source:expr) => {
        $crate::SeoscopeError::Config {
            message: $msg.to_string(),
            source: Some(Box::new($source)),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::SeoscopeError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check the field value and format"),
        }
    };
    ($msg:expr, $field:expr, $component:expr, $suggestion:expr) => {
        $crate::SeoscopeError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_operation("validate")
                .with_suggestion($suggestion),
        }
    };
}

#[macro_export]
macro_rules! not_found_error {
    ($resource:expr, $component:expr) => {
        $crate::SeoscopeError::NotFound {
            resource: $resource.to_string(),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Verify the file path")
                .with_suggestion("Pass a different file with --file"),
        }
    };
}

#[macro_export]
macro_rules! llm_error {
    ($msg:expr, $provider:expr, $model:expr, $component:expr) => {
        $crate::SeoscopeError::Llm {
            message: $msg.to_string(),
            provider: Some($provider.to_string()),
            model: Some($model.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check the API key and network connectivity")
                .with_suggestion("Run with --mock to skip the live call"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_builder() {
        let context = ErrorContext::new("cli")
            .with_operation("read_file")
            .with_metadata("path", "missing.txt")
            .with_suggestion("Check the path");

        assert_eq!(context.component, "cli");
        assert_eq!(context.operation.as_deref(), Some("read_file"));
        assert_eq!(context.metadata.get("path").map(String::as_str), Some("missing.txt"));
        assert_eq!(context.recovery_suggestions.len(), 1);
        assert!(!context.error_id.is_empty());
    }

    #[test]
    fn test_recoverability() {
        let llm = llm_error!("rate limited", "openai", "gpt-3.5-turbo", "test");
        assert!(llm.is_recoverable());

        let timeout = SeoscopeError::Timeout {
            operation: "suggest".to_string(),
            duration_ms: 10,
            context: ErrorContext::new("test"),
        };
        assert!(timeout.is_recoverable());

        let missing = not_found_error!("sample_content.txt", "test");
        assert!(!missing.is_recoverable());
        assert!(missing.context().is_some());

        let io = SeoscopeError::from(std::io::Error::other("boom"));
        assert!(!io.is_recoverable());
        assert!(io.context().is_none());
    }

    #[test]
    fn test_validation_error_carries_field() {
        let err = validation_error!("must be positive", "analysis.long_sentence_words", "test");
        match err {
            SeoscopeError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("analysis.long_sentence_words"));
            }
            _ => panic!("Expected Validation error"),
        }
    }
}
