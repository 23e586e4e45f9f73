//! Embedding host SDK seam.
//!
//! The embedding host (Shopify's Embedded App SDK) manages the iframe
//! chrome and signals when the surrounding admin shell is ready. The SDK
//! itself is an external collaborator; this module only models its
//! `init(config)` / `ready(callback)` surface.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;

/// Config handed to the embedding host SDK's `init`.
#[derive(Debug, Clone, Serialize)]
pub struct HostInitConfig {
    /// API key of the embedded app.
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// Shop origin, `protocol + shop`, e.g. `https://foo.myshopify.com`.
    #[serde(rename = "shopOrigin")]
    pub shop_origin: String,
    /// Host SDK debug flag.
    pub debug: bool,
}

/// The embedding host SDK.
#[async_trait]
pub trait EmbedHost: Send + Sync {
    /// Hand the host its init config. Fire-and-forget: there is no failure
    /// path from this call itself.
    fn init(&self, config: &HostInitConfig);

    /// Resolve once the host signals that the admin shell is ready.
    ///
    /// This is the bootstrap's one suspension point that is not network
    /// I/O. There is no timeout: if the host never signals, the bootstrap
    /// never completes.
    async fn ready(&self);
}

/// Host implementation driven by an explicit ready signal.
///
/// Records init configs and resolves `ready()` once [`fire_ready`] has been
/// called (before or after the waiter arrives). Used by tests and by
/// embedding glue that bridges the real host SDK's ready callback.
///
/// [`fire_ready`]: SignalHost::fire_ready
#[derive(Debug)]
pub struct SignalHost {
    ready: watch::Sender<bool>,
    init_configs: Mutex<Vec<HostInitConfig>>,
}

impl SignalHost {
    /// Create a host that has not signaled ready yet.
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            ready,
            init_configs: Mutex::new(Vec::new()),
        }
    }

    /// Signal that the admin shell is ready. Idempotent.
    pub fn fire_ready(&self) {
        let _ = self.ready.send(true);
    }

    /// All init configs received so far.
    pub fn init_configs(&self) -> Vec<HostInitConfig> {
        self.init_configs
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl Default for SignalHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbedHost for SignalHost {
    fn init(&self, config: &HostInitConfig) {
        if let Ok(mut configs) = self.init_configs.lock() {
            configs.push(config.clone());
        }
    }

    async fn ready(&self) {
        let mut rx = self.ready.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                // Sender gone without ever firing: the host will never be
                // ready, so park forever, matching the no-timeout contract.
                std::future::pending::<()>().await;
            }
        }
    }
}
