//! Configuration loading, saving and validation

use crate::error::{SeoscopeError, SeoscopeResult};
use crate::types::SeoscopeConfig;
use crate::validation_error;

use std::path::{Path, PathBuf};
use tracing::info;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "seoscope.toml";

impl SeoscopeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SeoscopeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SeoscopeError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> SeoscopeResult<Self> {
        let config: SeoscopeConfig = toml::from_str(content).map_err(|e| SeoscopeError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SeoscopeResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| SeoscopeError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| SeoscopeError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Load from an explicit path, or from the first default location that exists
    pub fn load(explicit: Option<&Path>) -> SeoscopeResult<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from {:?}", path);
            return Self::from_file(path);
        }

        for path in default_config_paths() {
            if path.exists() {
                info!("Loading configuration from {:?}", path);
                return Self::from_file(&path);
            }
        }

        info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Validate configuration; failures name the offending field
    pub fn validate(&self) -> SeoscopeResult<()> {
        let thresholds = &self.analysis.difficulty;

        if !thresholds.easy_max.is_finite() || thresholds.easy_max < 0.0 {
            return Err(validation_error!(
                "Difficulty thresholds must be finite and non-negative",
                "analysis.difficulty.easy_max",
                "config",
                "Set analysis.difficulty.easy_max to a positive number"
            ));
        }

        if !thresholds.moderate_max.is_finite() {
            return Err(validation_error!(
                "Difficulty thresholds must be finite and non-negative",
                "analysis.difficulty.moderate_max",
                "config",
                "Set analysis.difficulty.moderate_max to a positive number"
            ));
        }

        if thresholds.easy_max > thresholds.moderate_max {
            return Err(validation_error!(
                "analysis.difficulty.easy_max must not exceed moderate_max",
                "analysis.difficulty.easy_max",
                "config",
                "Lower easy_max or raise moderate_max"
            ));
        }

        if self.analysis.long_sentence_words == 0 {
            return Err(validation_error!(
                "analysis.long_sentence_words must be greater than 0",
                "analysis.long_sentence_words",
                "config",
                "Set analysis.long_sentence_words to a positive value"
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(validation_error!(
                "LLM max_tokens must be greater than 0",
                "llm.max_tokens",
                "config",
                "Set llm.max_tokens to a positive value"
            ));
        }

        if self.llm.timeout_secs == 0 {
            return Err(validation_error!(
                "LLM timeout_secs must be greater than 0",
                "llm.timeout_secs",
                "config",
                "Set llm.timeout_secs to a positive value"
            ));
        }

        Ok(())
    }
}

/// Candidate config locations, in lookup order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|d| d.join("seoscope").join("config.toml")),
        dirs::home_dir().map(|d| d.join(".seoscope").join("config.toml")),
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
