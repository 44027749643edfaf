use std::{future::Future, pin::Pin, time::Duration};

use dioxus_logger::tracing;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a retryable operation
pub type RetryFuture<R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send>>;

/// Context for service methods providing retry logic
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff_secs: u64,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    /// Execute a method with automatic retry logic
    ///
    /// The operation is invoked again after a backoff of 1s, 2s, 4s... whenever it fails with
    /// an error whose [`ErrorRetryStrategy`] is `Retry`, up to the max attempts. Permanent
    /// errors are returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "fetch seasons")
    /// - `operation`: Function producing a fresh future for each attempt
    pub async fn execute_with_retry<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs = self.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use sea_orm::{DbErr, RuntimeErr};

    use super::RetryContext;
    use crate::server::error::{league::LeagueError, Error};

    fn no_backoff(max_attempts: u32) -> RetryContext {
        RetryContext {
            max_attempts,
            initial_backoff_secs: 0,
        }
    }

    fn connection_error() -> Error {
        Error::DbErr(DbErr::Conn(RuntimeErr::Internal("connection reset".to_string())))
    }

    /// Expect a retryable failure followed by success to return the result
    #[tokio::test]
    async fn retries_transient_error() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = no_backoff(3);
        let result = ctx
            .execute_with_retry("flaky read", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        return Err(connection_error());
                    }
                    Ok(7)
                })
            })
            .await;

        assert!(matches!(result, Ok(7)));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Expect a permanent error to be returned after a single attempt
    #[tokio::test]
    async fn fails_fast_on_permanent_error() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = no_backoff(3);
        let result: Result<(), Error> = ctx
            .execute_with_retry("missing season", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(LeagueError::SeasonNotFound(2020).into())
                })
            })
            .await;

        assert!(matches!(result, Err(Error::LeagueError(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    /// Expect the last error once max attempts are exhausted
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = no_backoff(3);
        let result: Result<(), Error> = ctx
            .execute_with_retry("unreachable database", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(connection_error())
                })
            })
            .await;

        assert!(matches!(result, Err(Error::DbErr(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
