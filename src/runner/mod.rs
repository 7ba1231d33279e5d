//! Request execution: one deadline-bounded attempt ([`Executor`]) and the
//! sequential retry loop built on top of it ([`with_retries`]).

mod executor;
mod retry;

pub use executor::Executor;
pub use retry::{retry_with_backoff, with_retries, BackoffPolicy};

use crate::error::AttemptError;
use crate::transport::HttpResponse;

/// Result of one attempt, or of a whole retry sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(HttpResponse),
    Retryable(AttemptError),
    Terminal(AttemptError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Collapse into a `Result`, forgetting whether the failure was retryable.
    pub fn into_result(self) -> Result<HttpResponse, AttemptError> {
        match self {
            Outcome::Success(response) => Ok(response),
            Outcome::Retryable(e) | Outcome::Terminal(e) => Err(e),
        }
    }
}
