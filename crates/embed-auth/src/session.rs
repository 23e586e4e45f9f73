//! The session bootstrap sequence.
//!
//! A linear pipeline, not a state machine: detect embedding, init the
//! host SDK, wait for the host-ready signal, exchange the custom token for
//! a provider user, force-refresh an ID token, init the backend session.
//! Every failure past the host handshake funnels into the same recovery:
//! a full-page OAuth redirect.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use shopify_embed_client::ShopClient;

use crate::browser::{is_embedded, Browser};
use crate::config::AppConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::host::{EmbedHost, HostInitConfig};
use crate::provider::AuthProvider;
use crate::redirect::Redirector;

/// Response of the custom-token lookup.
///
/// The auth microservice signals "no token" either with an HTTP 404 or
/// with an in-body `{"status": 404}` marker; both forms appear in the
/// wild and are treated as the same condition.
#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    #[serde(default)]
    status: Option<u16>,
    #[serde(rename = "firebaseToken", default)]
    firebase_token: Option<String>,
}

/// Orchestrates the bootstrap from page load to a ready backend session.
///
/// One invocation per page load. The pipeline has no cycles and no
/// re-entry: the only way to run it again is the OAuth redirect, which
/// reloads the page.
#[derive(Clone)]
pub struct SessionBootstrapper {
    shop: ShopClient,
    host: Arc<dyn EmbedHost>,
    provider: Arc<dyn AuthProvider>,
    browser: Arc<dyn Browser>,
    redirector: Redirector,
}

impl std::fmt::Debug for SessionBootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBootstrapper")
            .field("shop", &self.shop)
            .finish_non_exhaustive()
    }
}

impl SessionBootstrapper {
    /// Create a bootstrapper over the given backend client and seams.
    pub fn new(
        shop: ShopClient,
        host: Arc<dyn EmbedHost>,
        provider: Arc<dyn AuthProvider>,
        browser: Arc<dyn Browser>,
    ) -> Self {
        let redirector = Redirector::new(shop.auth_base_url(), Arc::clone(&browser));
        Self {
            shop,
            host,
            provider,
            browser,
            redirector,
        }
    }

    /// Get the redirector.
    pub fn redirector(&self) -> &Redirector {
        &self.redirector
    }

    /// Run the full bootstrap sequence.
    ///
    /// On success the returned value is the backend's opaque init payload
    /// and `config.firebase` carries the custom token, the user handle,
    /// and the ID token. On failure the page is already navigating to the
    /// OAuth sign-in (except for pure transport breakage before the
    /// embedding check, which cannot happen in this ordering).
    ///
    /// Step order is strict: each step's output is the next step's input.
    #[instrument(skip(self, config), fields(app = %config.app_name, %shop_name))]
    pub async fn bootstrap(
        &self,
        config: &mut AppConfig,
        protocol: &str,
        shop: &str,
        shop_name: &str,
    ) -> Result<serde_json::Value> {
        config.shopify.protocol = protocol.to_string();
        config.shopify.shop = shop.to_string();
        config.shopify.shop_name = shop_name.to_string();

        if !is_embedded(&*self.browser) {
            warn!("Not embedded in the admin shell, leaving for OAuth sign-in");
            self.redirector.redirect_to_auth(&config.app_name, shop_name);
            return Err(Error::new(ErrorKind::NotEmbedded));
        }

        // Fire-and-forget: the host reports back through its ready signal.
        self.host.init(&HostInitConfig {
            api_key: config.shopify.api_key.clone(),
            shop_origin: format!("{}{}", protocol, shop),
            debug: config.debug,
        });

        self.host.ready().await;
        debug!("Host signaled ready, starting sign-in");

        match self.sign_in(config).await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                warn!(error = %err, "Sign-in failed, leaving for OAuth sign-in");
                self.redirector
                    .redirect_to_auth(&config.app_name, &config.shopify.shop_name);
                Err(err)
            }
        }
    }

    /// Steps 4–5: credential exchange and backend session init.
    async fn sign_in(&self, config: &mut AppConfig) -> Result<serde_json::Value> {
        self.provider.initialize(&config.firebase)?;

        let app_name = config.app_name.clone();
        let shop_name = config.shopify.shop_name.clone();

        let custom_token = self.fetch_custom_token(&app_name, &shop_name).await?;
        config.firebase.custom_token = Some(custom_token.clone());

        let user = self.provider.sign_in_with_custom_token(&custom_token).await?;

        // Force refresh: the backend verifies this token, never hand it a
        // cached one.
        let id_token = user.id_token(true).await?;
        config.firebase.user = Some(Arc::clone(&user));
        config.firebase.id_token = Some(id_token.clone());

        self.init_backend(&app_name, &shop_name, &id_token).await
    }

    /// Step 4b: ask the auth microservice for a one-time custom token.
    #[instrument(skip(self))]
    async fn fetch_custom_token(&self, app_name: &str, shop_name: &str) -> Result<String> {
        let url = self.shop.token_url(app_name, shop_name);

        let envelope: TokenEnvelope = match self.shop.get_json(&url).await {
            Ok(envelope) => envelope,
            Err(err) if err.is_not_found() => {
                return Err(Error::with_source(ErrorKind::TokenNotFound, err));
            }
            Err(err) => return Err(err.into()),
        };

        if envelope.status == Some(404) {
            return Err(Error::new(ErrorKind::TokenNotFound));
        }

        match envelope.firebase_token {
            Some(token) => Ok(token),
            None => Err(Error::new(ErrorKind::Transport(
                "token endpoint returned neither a firebaseToken nor a 404 marker".to_string(),
            ))),
        }
    }

    /// Step 5: establish the backend session with the fresh ID token.
    #[instrument(skip(self, id_token))]
    async fn init_backend(
        &self,
        app_name: &str,
        shop_name: &str,
        id_token: &str,
    ) -> Result<serde_json::Value> {
        let url = self.shop.init_url(app_name, shop_name, id_token);

        self.shop.get_json(&url).await.map_err(|err| {
            Error::with_source(
                ErrorKind::BackendInit(crate::error::sanitize(err.to_string())),
                err,
            )
        })
    }
}
