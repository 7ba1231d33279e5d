//! Cold-start tolerant client for a reviews backend.
//!
//! ```text
//! ReviewClient::fetch_reviews / submit_review
//!     → runner::with_retries      (sequential attempts, linear backoff)
//!     → runner::Executor          (one deadline + cancellation token per attempt)
//!     → transport::Transport      (reqwest in production)
//!
//! ReviewClient::prewarm
//!     → prewarm::Prewarmer        (detached probe of the health path, no retries)
//!     → runner::Executor
//! ```
//!
//! The backend base URL is resolved once from the host name by
//! [`endpoint::resolve_base_url`] and stays fixed for the client's lifetime.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod prewarm;
pub mod reviews;
pub mod runner;
pub mod transport;

pub use client::ReviewClient;
pub use config::Config;
pub use error::{AttemptError, ClientError, ReviewkitError};
pub use reviews::{ReviewRecord, ServerAck, SubmissionPayload};
