//! Backend address selection.
//!
//! The base URL is resolved once, when a client is built, from the host name
//! the client runs under. It never changes afterwards.

use crate::config::EndpointConfig;
use std::fmt;

/// Immutable backend base address, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a request path (expected to start with `/`).
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim().trim_end_matches('.');
    host.eq_ignore_ascii_case("localhost") || matches!(host, "127.0.0.1" | "::1" | "[::1]")
}

/// Pick the local development address for loopback hosts, production otherwise.
pub fn resolve_base_url(host: &str, endpoints: &EndpointConfig) -> BaseUrl {
    if is_loopback_host(host) {
        BaseUrl::new(endpoints.local_url.as_str())
    } else {
        BaseUrl::new(endpoints.production_url.as_str())
    }
}
