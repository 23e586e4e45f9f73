//! Core HTTP transport: one GET request, one JSON result.
//!
//! No retries and no backoff. When a call fails, the caller either reports
//! the error or leaves the page entirely via the OAuth redirect; repeating
//! the request in place is never part of the protocol.

use tracing::{debug, info, instrument};

use crate::config::TransportConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// HTTP transport for the embedded-app backend microservices.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new transport with default configuration.
    pub fn default_transport() -> Result<Self> {
        Self::new(TransportConfig::default())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Execute a request, mapping non-success statuses to errors.
    ///
    /// A 404 becomes `ErrorKind::NotFound` so that callers can tell a
    /// missing auth token apart from a broken backend.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self.inner.get(&request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if self.config.enable_tracing {
            debug!(url = %request.url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            if response.status().is_success() {
                debug!(status, "Response received");
            } else {
                info!(status, "Non-success response");
            }
        }

        if status == 404 {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::new(ErrorKind::NotFound(message)));
        }

        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::new(ErrorKind::Http { status, message }));
        }

        Ok(Response::new(response))
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }
}
