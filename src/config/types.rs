use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub timeouts: TimeoutConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub prewarm: PrewarmConfig,
}

/// Backend addresses, picked between by the host the client runs on.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct EndpointConfig {
    /// Used when the host is a loopback name
    #[serde(default = "default_local_url")]
    pub local_url: String,

    /// Used for every other host
    #[serde(default = "default_production_url")]
    pub production_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            local_url: default_local_url(),
            production_url: default_production_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PathsConfig {
    #[serde(default = "default_health_path")]
    pub health: String,

    #[serde(default = "default_reviews_path")]
    pub reviews: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            health: default_health_path(),
            reviews: default_reviews_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TimeoutConfig {
    /// Deadline for each attempt of a review call
    #[serde(default = "default_request_ms")]
    pub request_ms: u64,

    /// Deadline for the single prewarm probe
    #[serde(default = "default_prewarm_ms")]
    pub prewarm_ms: u64,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    pub fn prewarm(&self) -> Duration {
        Duration::from_millis(self.prewarm_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_ms: default_request_ms(),
            prewarm_ms: default_prewarm_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PrewarmConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay before the probe, so it does not compete with startup work
    #[serde(default = "default_prewarm_delay_ms")]
    pub delay_ms: u64,
}

impl PrewarmConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PrewarmConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            delay_ms: default_prewarm_delay_ms(),
        }
    }
}
