use crate::config::RetryConfig;
use crate::error::AttemptError;
use crate::transport::RequestSpec;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use super::{Executor, Outcome};

/// Bounded, linear backoff: the pause after failed attempt `k` is `base_delay * k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl BackoffPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        self.base_delay.saturating_mul(failed_attempt)
    }

    fn budget(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        BackoffPolicy::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for BackoffPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.backoff_base_ms),
        )
    }
}

/// Run `operation` until it succeeds, fails terminally, or the attempt budget
/// runs out. Attempts never overlap.
///
/// A retryable failure on the last attempt is returned as
/// `Terminal(Exhausted { .. })` carrying that attempt's reason. Dropping the
/// returned future abandons the current attempt and any pending backoff.
pub async fn retry_with_backoff<F, Fut>(policy: &BackoffPolicy, mut operation: F) -> Outcome
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Outcome>,
{
    let budget = policy.budget();
    let mut attempts = 0;

    loop {
        attempts += 1;
        debug!("Attempt {}/{}", attempts, budget);

        match operation(attempts).await {
            Outcome::Success(response) => return Outcome::Success(response),
            Outcome::Terminal(e) => {
                warn!("Attempt {} failed terminally: {}", attempts, e);
                return Outcome::Terminal(e);
            }
            Outcome::Retryable(e) if attempts >= budget => {
                warn!("All {} attempts failed: {}", attempts, e);
                return Outcome::Terminal(AttemptError::Exhausted {
                    attempts,
                    last: Box::new(e),
                });
            }
            Outcome::Retryable(e) => {
                let delay = policy.delay_after(attempts);
                warn!(
                    "Attempt {} failed: {}. Retrying in {:?}...",
                    attempts, e, delay
                );
                sleep(delay).await;
            }
        }
    }
}

/// Issue `spec` through `executor` under `policy`, each attempt with a fresh
/// `deadline`.
pub async fn with_retries(
    executor: &Executor,
    spec: &RequestSpec,
    policy: &BackoffPolicy,
    deadline: Duration,
) -> Outcome {
    let span = info_span!(
        "call",
        id = %Uuid::new_v4(),
        method = %spec.method,
        path = %spec.path
    );

    retry_with_backoff(policy, move |_| executor.execute(spec, deadline))
        .instrument(span)
        .await
}
