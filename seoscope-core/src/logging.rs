//! Logging setup
//!
//! Compact structured logs on stderr, so the report printed on stdout stays clean

use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Print source file and line with each event
    pub include_location: bool,
    /// Emit an event with the elapsed time when a span closes
    pub enable_performance_monitoring: bool,
    /// Extra per-target directives, e.g. `seoscope_llm=debug`
    pub filter_directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_location: false,
            enable_performance_monitoring: false,
            filter_directives: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Debug-level logging for the seoscope crates
    pub fn verbose() -> Self {
        let filter_directives = ["seoscope", "seoscope_core", "seoscope_analysis", "seoscope_llm"]
            .iter()
            .map(|target| format!("{}=debug", target))
            .collect();

        Self {
            level: "info".to_string(),
            include_location: true,
            enable_performance_monitoring: true,
            filter_directives,
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        self.filter_directives
            .iter()
            .try_fold(base, |filter, directive| Ok(filter.add_directive(directive.parse()?)))
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let span_events = if config.enable_performance_monitoring {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .compact()
        .with_span_events(span_events)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Timing of pipeline steps, logged under the `performance` target
pub mod performance {
    use std::time::Instant;
    use tracing::{info_span, Instrument};

    fn report(operation: &str, start: Instant) {
        tracing::info!(
            target: "performance",
            operation,
            duration_ms = start.elapsed().as_millis(),
            "Operation completed"
        );
    }

    pub async fn measure_async<F, T>(operation: &str, future: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        let start = Instant::now();
        let result = future
            .instrument(info_span!("performance", operation))
            .await;
        report(operation, start);
        result
    }

    pub fn measure_sync<F, T>(operation: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = info_span!("performance", operation).in_scope(f);
        report(operation, start);
        result
    }
}

/// `log_operation_start!("analyze", file = %path)`: info event marking a step's start
#[macro_export]
macro_rules! log_operation_start {
    ($operation:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(operation = $operation, $($($field)+,)? "Starting operation")
    };
}

#[macro_export]
macro_rules! log_operation_success {
    ($operation:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(operation = $operation, $($($field)+,)? "Operation completed successfully")
    };
}

/// Error event for a failed step; `$error` is recorded with its `Display` form
#[macro_export]
macro_rules! log_operation_error {
    ($operation:expr, $error:expr $(, $($field:tt)+)?) => {
        $crate::tracing::error!(
            operation = $operation,
            error = %$error,
            $($($field)+,)?
            "Operation failed"
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_config_adds_directives() {
        let config = LoggingConfig::verbose();
        assert_eq!(config.filter_directives.len(), 4);
        assert!(config.filter_directives.contains(&"seoscope_llm=debug".to_string()));
        assert!(config.enable_performance_monitoring);
    }

    #[test]
    fn test_bad_directive_is_rejected() {
        let config = LoggingConfig {
            filter_directives: vec!["seoscope=loud".to_string()],
            ..LoggingConfig::default()
        };
        assert!(config.env_filter().is_err());
    }

    #[test]
    fn test_measure_sync_returns_value() {
        let value = performance::measure_sync("add", || 2 + 2);
        assert_eq!(value, 4);
    }

    #[tokio::test]
    async fn test_measure_async_returns_value() {
        let value = performance::measure_async("async_add", async { 40 + 2 }).await;
        assert_eq!(value, 42);
    }
}
