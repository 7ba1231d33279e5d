//! Background warm-up of a cold backend.
//!
//! A single probe against the health path, fired shortly after startup so the
//! backend is already awake when the first real call arrives. The probe runs
//! as a detached task and every outcome ends in [`record_prewarm`].

use crate::config::Config;
use crate::error::AttemptError;
use crate::runner::Executor;
use crate::transport::RequestSpec;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

pub struct Prewarmer {
    executor: Arc<Executor>,
    probe: RequestSpec,
    delay: Duration,
    deadline: Duration,
    enabled: bool,
    scheduled: AtomicBool,
}

impl Prewarmer {
    pub fn new(executor: Arc<Executor>, config: &Config) -> Self {
        Self {
            executor,
            probe: RequestSpec::get(config.paths.health.as_str()),
            delay: config.prewarm.delay(),
            deadline: config.timeouts.prewarm(),
            enabled: config.prewarm.enabled,
            scheduled: AtomicBool::new(false),
        }
    }

    /// Schedule the probe now. See [`Prewarmer::schedule_after`].
    pub fn schedule(&self) -> Option<JoinHandle<()>> {
        self.schedule_after(std::future::ready(()))
    }

    /// Schedule the probe to run once `ready` resolves, plus the configured
    /// delay. Only the first call on a given prewarmer spawns anything; later
    /// calls, and calls while prewarm is disabled, return `None`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_after<R>(&self, ready: R) -> Option<JoinHandle<()>>
    where
        R: Future<Output = ()> + Send + 'static,
    {
        if !self.enabled {
            debug!("Prewarm disabled");
            return None;
        }
        if self.scheduled.swap(true, Ordering::SeqCst) {
            debug!("Prewarm already scheduled");
            return None;
        }

        let executor = self.executor.clone();
        let probe = self.probe.clone();
        let delay = self.delay;
        let deadline = self.deadline;

        Some(tokio::spawn(async move {
            ready.await;
            sleep(delay).await;
            debug!("Prewarming backend at {}", executor.base_url());
            record_prewarm(run_probe(&executor, &probe, deadline).await);
        }))
    }
}

async fn run_probe(
    executor: &Executor,
    probe: &RequestSpec,
    deadline: Duration,
) -> Result<Duration, AttemptError> {
    let start = Instant::now();
    executor
        .execute(probe, deadline)
        .await
        .into_result()
        .map(|_| start.elapsed())
}

/// Where every prewarm outcome lands. Nothing propagates past this point.
fn record_prewarm(result: Result<Duration, AttemptError>) {
    match result {
        Ok(elapsed) => info!("Backend warm ({:?})", elapsed),
        // A slow health check is the usual cold start, not a fault
        Err(e) if e.is_timeout() => info!(
            "Prewarm timed out, backend is still waking up: {}",
            e
        ),
        Err(e) => warn!(
            "Prewarm failed, backend will wake on the first real call: {}",
            e
        ),
    }
}
