//! Async utilities

use crate::error::{ErrorContext, SeoscopeError, SeoscopeResult};
use tokio::time::{timeout, Duration};
use tracing::warn;

/// Run a future with a timeout, mapping expiry to `SeoscopeError::Timeout`
pub async fn with_timeout<F, T>(future: F, timeout_ms: u64, operation_name: &str) -> SeoscopeResult<T>
where
    F: std::future::Future<Output = T>,
{
    match timeout(Duration::from_millis(timeout_ms), future).await {
        Ok(result) => Ok(result),
        Err(_) => {
            warn!(
                operation = operation_name,
                timeout_ms = timeout_ms,
                "Operation timed out"
            );
            Err(SeoscopeError::Timeout {
                operation: operation_name.to_string(),
                duration_ms: timeout_ms,
                context: ErrorContext::new("async_utils")
                    .with_operation("timeout")
                    .with_metadata("timeout_ms", &timeout_ms.to_string())
                    .with_suggestion("Increase llm.timeout_secs")
                    .with_suggestion("Check network connectivity"),
            })
        }
    }
}
