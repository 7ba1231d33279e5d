//! The operations UI collaborators are allowed to call.
//!
//! Both review calls go through [`with_retries`] with the configured policy.
//! Technical failure reasons are logged here and replaced with a
//! [`ClientError`] before anything is returned.
//!
//! `submit_review` retries a POST without an idempotency key. If the backend
//! stored the first attempt but the response was lost, the retry creates a
//! duplicate. A duplicate review is preferred over a lost one.

use crate::config::Config;
use crate::endpoint::{resolve_base_url, BaseUrl};
use crate::error::{AttemptError, ClientError, ReviewkitError};
use crate::prewarm::Prewarmer;
use crate::reviews::{reviews_from_body, ReviewRecord, ServerAck, SubmissionPayload};
use crate::runner::{with_retries, BackoffPolicy, Executor};
use crate::transport::{HttpResponse, HttpTransport, RequestSpec, Transport};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub struct ReviewClient {
    executor: Arc<Executor>,
    prewarmer: Prewarmer,
    policy: BackoffPolicy,
    deadline: Duration,
    reviews_path: String,
}

impl ReviewClient {
    /// Build a client over HTTP for code running on `host`.
    pub fn new(config: &Config, host: &str) -> Result<Self, ReviewkitError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, host, Arc::new(transport)))
    }

    /// Build a client and schedule the backend prewarm right away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect(config: &Config, host: &str) -> Result<Self, ReviewkitError> {
        let client = Self::new(config, host)?;
        client.prewarm();
        Ok(client)
    }

    pub fn with_transport(config: &Config, host: &str, transport: Arc<dyn Transport>) -> Self {
        let base_url = resolve_base_url(host, &config.endpoints);
        info!("Review client ready, base URL {}", base_url);

        let executor = Arc::new(Executor::new(transport, base_url));
        Self {
            prewarmer: Prewarmer::new(executor.clone(), config),
            executor,
            policy: BackoffPolicy::from(&config.retry),
            deadline: config.timeouts.request(),
            reviews_path: config.paths.reviews.clone(),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.executor.base_url()
    }

    /// Fire-and-forget backend warm-up. Safe to call repeatedly; only the
    /// first call schedules a probe.
    pub fn prewarm(&self) -> Option<JoinHandle<()>> {
        self.prewarmer.schedule()
    }

    /// Like [`ReviewClient::prewarm`], but waits for `ready` first.
    pub fn prewarm_when<R>(&self, ready: R) -> Option<JoinHandle<()>>
    where
        R: Future<Output = ()> + Send + 'static,
    {
        self.prewarmer.schedule_after(ready)
    }

    pub async fn fetch_reviews(&self) -> Result<Vec<ReviewRecord>, ClientError> {
        let spec =
            RequestSpec::get(self.reviews_path.as_str()).header("Accept", "application/json");

        let response = self.call(&spec).await.map_err(|reason| {
            error!("fetch_reviews failed: {}", reason);
            ClientError::ReviewsUnavailable
        })?;

        reviews_from_body(&response.body).map_err(|e| {
            error!("fetch_reviews got an unreadable body: {}", e);
            ClientError::ReviewsUnavailable
        })
    }

    pub async fn submit_review(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ServerAck, ClientError> {
        let spec = RequestSpec::post_json(self.reviews_path.as_str(), payload)
            .map_err(|e| {
                error!("submit_review could not encode payload: {}", e);
                ClientError::SubmissionFailed
            })?
            .header("Accept", "application/json");

        let response = self.call(&spec).await.map_err(|reason| {
            error!("submit_review failed: {}", reason);
            ClientError::SubmissionFailed
        })?;

        response.json::<ServerAck>().map_err(|e| {
            error!("submit_review got an unreadable acknowledgment: {}", e);
            ClientError::SubmissionFailed
        })
    }

    async fn call(&self, spec: &RequestSpec) -> Result<HttpResponse, AttemptError> {
        with_retries(&self.executor, spec, &self.policy, self.deadline)
            .await
            .into_result()
    }
}
