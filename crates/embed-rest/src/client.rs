//! Ready-gated resource client over the API proxy.

mod metafields;
mod products;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use shopify_embed_auth::{
    AppConfig, AuthProvider, Browser, EmbedHost, SessionBootstrapper,
};
use shopify_embed_client::ShopClient;

use crate::cache::{MemoryCache, PayloadCache};
use crate::error::{Error, ErrorKind, Result};

/// What an API call does when the bootstrap has not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyPolicy {
    /// Fail immediately with a not-ready error.
    FailFast,
    /// Wait once for the given duration, then re-check; still not ready
    /// fails with a not-ready error.
    RetryAfter(Duration),
}

impl Default for NotReadyPolicy {
    fn default() -> Self {
        Self::FailFast
    }
}

/// Resource client for an embedded app's API proxy.
///
/// Owns the app config, runs the bootstrap sequence, and exposes the
/// proxied Admin-API-style operations. Every resource call goes through
/// the ready gate: until [`bootstrap`] resolves, calls fail (or wait once,
/// per [`NotReadyPolicy`]).
///
/// # Example
///
/// ```rust,ignore
/// use shopify_embed_rest::EmbedRestClient;
///
/// let client = EmbedRestClient::new(shop, config, host, provider, browser);
///
/// client.bootstrap("https://", "foo.myshopify.com", "foo").await?;
///
/// let products = client.list_all_products(true, "id,title").await?;
/// ```
///
/// [`bootstrap`]: EmbedRestClient::bootstrap
pub struct EmbedRestClient {
    shop: ShopClient,
    bootstrapper: SessionBootstrapper,
    // Doubles as the single-in-flight bootstrap guard.
    config: Mutex<AppConfig>,
    ready: AtomicBool,
    cache: Box<dyn PayloadCache>,
    not_ready_policy: NotReadyPolicy,
}

impl std::fmt::Debug for EmbedRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedRestClient")
            .field("shop", &self.shop)
            .field("ready", &self.ready.load(Ordering::SeqCst))
            .field("not_ready_policy", &self.not_ready_policy)
            .finish_non_exhaustive()
    }
}

impl EmbedRestClient {
    /// Create a resource client over the given backend client and seams.
    pub fn new(
        shop: ShopClient,
        config: AppConfig,
        host: Arc<dyn EmbedHost>,
        provider: Arc<dyn AuthProvider>,
        browser: Arc<dyn Browser>,
    ) -> Self {
        let bootstrapper = SessionBootstrapper::new(shop.clone(), host, provider, browser);
        Self {
            shop,
            bootstrapper,
            config: Mutex::new(config),
            ready: AtomicBool::new(false),
            cache: Box::new(MemoryCache::new()),
            not_ready_policy: NotReadyPolicy::default(),
        }
    }

    /// Replace the payload cache.
    pub fn with_cache(mut self, cache: Box<dyn PayloadCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Set the not-ready policy for API calls.
    pub fn with_not_ready_policy(mut self, policy: NotReadyPolicy) -> Self {
        self.not_ready_policy = policy;
        self
    }

    /// Get the underlying backend client.
    pub fn shop(&self) -> &ShopClient {
        &self.shop
    }

    /// Whether the bootstrap has completed and resource calls may proceed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Set the shop domain on the config; the shop name is derived.
    pub async fn set_shop(&self, shop: impl Into<String>) {
        self.config.lock().await.shopify.set_shop(shop);
    }

    /// Set the shop name on the config; the shop domain is derived.
    pub async fn set_shop_name(&self, shop_name: impl Into<String>) {
        self.config.lock().await.shopify.set_shop_name(shop_name);
    }

    /// Run the bootstrap sequence and flip the client to ready.
    ///
    /// Holding the config lock for the whole pipeline makes concurrent
    /// bootstraps serialize: a second caller waits, then runs against the
    /// config the first one left behind.
    pub async fn bootstrap(
        &self,
        protocol: &str,
        shop: &str,
        shop_name: &str,
    ) -> Result<Value> {
        let mut config = self.config.lock().await;
        let payload = self
            .bootstrapper
            .bootstrap(&mut config, protocol, shop, shop_name)
            .await?;

        self.ready.store(true, Ordering::SeqCst);
        Ok(payload)
    }

    /// Call an Admin-API-style operation through the ready gate.
    ///
    /// `params` is serialized into the `json` query parameter the proxy
    /// expects.
    #[instrument(skip(self, params))]
    pub async fn api(&self, resource: &str, method: &str, params: &Value) -> Result<Value> {
        if !self.is_ready() {
            match self.not_ready_policy {
                NotReadyPolicy::FailFast => {
                    return Err(Error::new(ErrorKind::NotReady));
                }
                NotReadyPolicy::RetryAfter(delay) => {
                    warn!(?delay, "API call before bootstrap completed, waiting once");
                    tokio::time::sleep(delay).await;
                    if !self.is_ready() {
                        return Err(Error::new(ErrorKind::NotReady));
                    }
                }
            }
        }
        self.call(resource, method, params).await
    }

    /// Perform the proxied call, bypassing the ready gate.
    async fn call(&self, resource: &str, method: &str, params: &Value) -> Result<Value> {
        let (app_name, shop_name) = self.identity().await;
        let url = self.shop.resource_url(&app_name, &shop_name, resource, method);
        let json = serde_json::to_string(params)?;

        debug!(%resource, %method, "Calling API proxy");
        self.shop
            .get_json_with_query(&url, &[("json", json)])
            .await
            .map_err(Into::into)
    }

    /// End the backend session.
    ///
    /// Not ready-gated: signing out of a half-bootstrapped session is
    /// legitimate. Drops the payload cache and flips the client back to
    /// not-ready.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<Value> {
        let (app_name, shop_name) = self.identity().await;
        let url = self.shop.signout_url(&app_name, &shop_name);

        let payload: Value = self.shop.get_json(&url).await?;
        self.ready.store(false, Ordering::SeqCst);
        self.cache.clear();
        Ok(payload)
    }

    pub(crate) async fn identity(&self) -> (String, String) {
        let config = self.config.lock().await;
        (config.app_name.clone(), config.shopify.shop_name.clone())
    }

    pub(crate) fn cache(&self) -> &dyn PayloadCache {
        &*self.cache
    }

    #[cfg(test)]
    pub(crate) fn force_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }
}
