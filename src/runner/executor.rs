use crate::endpoint::BaseUrl;
use crate::error::{AttemptError, TransportError};
use crate::transport::{HttpResponse, RequestSpec, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::Outcome;

/// Runs single attempts against a fixed base URL, each under its own deadline.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    base_url: BaseUrl,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>, base_url: BaseUrl) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Issue `spec` once. Settles no later than `deadline`.
    ///
    /// Every invocation owns a fresh cancellation token. It is cancelled when
    /// the deadline wins the race and released untouched when the call
    /// settles first; the drop guard covers every other exit path.
    pub async fn execute(&self, spec: &RequestSpec, deadline: Duration) -> Outcome {
        let url = self.base_url.join(&spec.path);
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();

        debug!(
            "{} {} via {} (deadline {:?})",
            spec.method,
            url,
            self.transport.name(),
            deadline
        );

        tokio::select! {
            result = self.transport.send(&url, spec, token.clone()) => {
                let _ = guard.disarm();
                classify(result)
            }
            _ = sleep(deadline) => {
                drop(guard);
                Outcome::Retryable(AttemptError::Timeout { deadline })
            }
        }
    }
}

fn classify(result: Result<HttpResponse, TransportError>) -> Outcome {
    match result {
        Ok(response) if response.is_success() => Outcome::Success(response),
        Ok(response) => Outcome::Retryable(AttemptError::Status(response.status)),
        Err(e) => Outcome::Retryable(AttemptError::Transport(e.to_string())),
    }
}
