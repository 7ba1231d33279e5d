use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewkitError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid URL for '{field}' ({value}): {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Path for '{field}' must start with '/': {value}")]
    InvalidPath { field: &'static str, value: String },

    #[error("retry.max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Failure raised by a [`Transport`](crate::transport::Transport) before any
/// HTTP status was observed.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("request aborted")]
    Aborted,
}

/// Why a single attempt, or a whole retry sequence, did not succeed.
///
/// The display strings are the reasons written to the diagnostic log. They
/// never reach end users; see [`ClientError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    #[error("timeout")]
    Timeout { deadline: Duration },

    #[error("network: {0}")]
    Transport(String),

    #[error("http status: {0}")]
    Status(u16),

    #[error("retries exhausted after {attempts} attempt(s): {last}")]
    Exhausted {
        attempts: u32,
        last: Box<AttemptError>,
    },
}

impl AttemptError {
    /// The failure of the last attempt, with any `Exhausted` wrapping removed.
    pub fn root_cause(&self) -> &AttemptError {
        match self {
            AttemptError::Exhausted { last, .. } => last.root_cause(),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.root_cause(), AttemptError::Timeout { .. })
    }
}

/// The only error surfaced to UI collaborators. Carries no technical detail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    #[error("reviews unavailable")]
    ReviewsUnavailable,

    #[error("could not send your review, please try again")]
    SubmissionFailed,
}
