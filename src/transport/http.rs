use super::{HttpResponse, Method, RequestSpec, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// `reqwest`-backed transport. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("reviewkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Build)?;
        Ok(Self { client })
    }

    async fn exchange(&self, url: &str, request: &RequestSpec) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn send(
        &self,
        url: &str,
        request: &RequestSpec,
        cancel: CancellationToken,
    ) -> Result<HttpResponse, TransportError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Aborted),
            result = self.exchange(url, request) => result,
        }
    }
}
