use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    content::FilterPolicy,
    errors::{DomainError, DomainResult},
};
use std::{future::Future, time::Duration};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-deployment knobs every query service receives explicitly.
#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub policy: FilterPolicy,
    pub timeout: Duration,
}

impl QuerySettings {
    pub fn new(policy: FilterPolicy, timeout: Duration) -> Self {
        Self { policy, timeout }
    }

    /// Runs one storage call under the configured timeout. An elapsed
    /// timeout is reported as `StorageUnavailable`; nothing is retried.
    pub async fn storage<T, F>(&self, operation: &'static str, call: F) -> ApplicationResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                if matches!(err, DomainError::StorageUnavailable(_)) {
                    tracing::error!(operation, error = %err, "storage call failed");
                }
                Err(err.into())
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "storage call timed out"
                );
                Err(ApplicationError::storage_unavailable(format!(
                    "{operation} timed out after {}ms",
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            policy: FilterPolicy::default(),
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}
