//! High-level client over the embedded-app backend microservices.
//!
//! This module provides `ShopClient`, which combines the HTTP transport
//! with the URL shapes of the two backend services (the API proxy and the
//! auth microservice) and offers typed JSON methods. It is designed to be
//! used by the higher-level crates (embed-auth, embed-rest).
//!
//! The transport layer is unauthenticated: the only credential that ever
//! appears in a request is the ID token embedded in the init path.

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::TransportConfig;
use crate::error::Result;
use crate::transport::HttpTransport;

/// Client for the embedded-app backend.
///
/// Holds the base URLs of the API proxy and the auth microservice and
/// builds the request paths for every backend operation.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_embed_client::ShopClient;
///
/// let client = ShopClient::new(
///     "https://api.example.com",
///     "https://auth.example.com",
/// )?;
///
/// let token: serde_json::Value = client
///     .get_json(&client.token_url("my-app", "my-shop"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ShopClient {
    transport: HttpTransport,
    api_base_url: String,
    auth_base_url: String,
}

impl ShopClient {
    /// Create a new client with the given base URLs.
    pub fn new(api_base_url: impl Into<String>, auth_base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(api_base_url, auth_base_url, TransportConfig::default())
    }

    /// Create a new client with custom transport configuration.
    pub fn with_config(
        api_base_url: impl Into<String>,
        auth_base_url: impl Into<String>,
        config: TransportConfig,
    ) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            transport,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            auth_base_url: auth_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the API proxy base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the auth microservice base URL.
    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    // =========================================================================
    // URL building
    // =========================================================================

    /// URL of the custom-token lookup on the auth microservice.
    pub fn token_url(&self, app_name: &str, shop_name: &str) -> String {
        format!(
            "{}/auth/{}/{}/token",
            self.auth_base_url, app_name, shop_name
        )
    }

    /// URL of the OAuth redirect page on the auth microservice.
    ///
    /// This is a navigation target, never fetched by the transport.
    pub fn redirect_url(&self, app_name: &str, shop_name: &str) -> String {
        format!(
            "{}/auth/{}/{}/redirect",
            self.auth_base_url, app_name, shop_name
        )
    }

    /// URL of the backend session init call. The ID token rides in the path.
    pub fn init_url(&self, app_name: &str, shop_name: &str, id_token: &str) -> String {
        format!(
            "{}/api/{}/{}/init/{}",
            self.api_base_url, app_name, shop_name, id_token
        )
    }

    /// URL of an Admin-API-style resource call.
    pub fn resource_url(
        &self,
        app_name: &str,
        shop_name: &str,
        resource: &str,
        method: &str,
    ) -> String {
        format!(
            "{}/api/{}/{}/{}/{}",
            self.api_base_url, app_name, shop_name, resource, method
        )
    }

    /// URL of the sign-out call.
    pub fn signout_url(&self, app_name: &str, shop_name: &str) -> String {
        format!(
            "{}/api/{}/{}/signout",
            self.api_base_url, app_name, shop_name
        )
    }

    // =========================================================================
    // Typed JSON methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.transport.get_json(self.transport.get(url)).await
    }

    /// GET request with query parameters and JSON response deserialization.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.transport.get(url);
        for (name, value) in params {
            request = request.query(*name, value.clone());
        }
        self.transport.get_json(request).await
    }
}
