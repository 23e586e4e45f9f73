//! Client configuration: app identity, shop identity, auth-provider setup.
//!
//! One `AppConfig` is owned by one client instance for one page session.
//! There is no ambient global state: everything the bootstrap populates
//! (custom token, user handle, ID token) lands on this struct.

use std::sync::Arc;

use crate::provider::AuthUser;

/// Top-level configuration for an embedded-app client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application name as registered with the backend microservices.
    pub app_name: String,
    /// Shopify-facing configuration.
    pub shopify: ShopifyConfig,
    /// Auth-provider (Firebase) configuration.
    pub firebase: FirebaseConfig,
    /// Debug flag passed through to the embedding host SDK.
    pub debug: bool,
}

impl AppConfig {
    /// Create a config for the given app.
    pub fn new(
        app_name: impl Into<String>,
        shopify: ShopifyConfig,
        firebase: FirebaseConfig,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            shopify,
            firebase,
            debug: false,
        }
    }

    /// Enable debug mode for the embedding host SDK.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Shopify sub-configuration.
///
/// `shop` and `shop_name` are kept consistent through [`set_shop`] and
/// [`set_shop_name`]; both are typically derived from URL query parameters
/// after the OAuth redirect lands back on the app page.
///
/// [`set_shop`]: ShopifyConfig::set_shop
/// [`set_shop_name`]: ShopifyConfig::set_shop_name
#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// API key of the embedded app.
    pub api_key: String,
    /// Protocol used for the shop origin, e.g. `https://`.
    pub protocol: String,
    /// Full shop domain, e.g. `foo.myshopify.com`.
    pub shop: String,
    /// Shop name, e.g. `foo`.
    pub shop_name: String,
}

impl ShopifyConfig {
    /// Create a config with the given API key and protocol.
    pub fn new(api_key: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            protocol: protocol.into(),
            shop: String::new(),
            shop_name: String::new(),
        }
    }

    /// Set the shop domain and derive the shop name from it.
    pub fn set_shop(&mut self, shop: impl Into<String>) {
        self.shop = shop.into();
        self.shop_name = shop_name_from_domain(&self.shop).to_string();
    }

    /// Set the shop name and derive the shop domain from it.
    pub fn set_shop_name(&mut self, shop_name: impl Into<String>) {
        self.shop_name = shop_name.into();
        self.shop = shop_domain(&self.shop_name);
    }
}

/// Extract the shop name from a shop domain,
/// e.g. `foo.myshopify.com` -> `foo`.
pub fn shop_name_from_domain(shop: &str) -> &str {
    shop.split('.').next().unwrap_or(shop)
}

/// Build the shop domain from a shop name, e.g. `foo` -> `foo.myshopify.com`.
pub fn shop_domain(shop_name: &str) -> String {
    format!("{}.myshopify.com", shop_name)
}

/// Auth-provider (Firebase) sub-configuration.
///
/// The static fields identify the provider project; `custom_token`,
/// `id_token`, and `user` are populated by the bootstrap sequence.
#[derive(Clone, Default)]
pub struct FirebaseConfig {
    /// Provider API key.
    pub api_key: String,
    /// Provider auth domain.
    pub auth_domain: String,
    /// Provider database URL.
    pub database_url: String,
    /// Provider storage bucket.
    pub storage_bucket: String,
    /// Optional messaging sender id.
    pub messaging_sender_id: Option<String>,

    /// One-time custom token from the auth microservice (set during
    /// bootstrap).
    pub custom_token: Option<String>,
    /// Force-refreshed ID token (set during bootstrap).
    pub id_token: Option<String>,
    /// Authenticated user handle (set during bootstrap).
    pub user: Option<Arc<dyn AuthUser>>,
}

impl FirebaseConfig {
    /// Create a config identifying the provider project.
    pub fn new(
        api_key: impl Into<String>,
        auth_domain: impl Into<String>,
        database_url: impl Into<String>,
        storage_bucket: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            auth_domain: auth_domain.into(),
            database_url: database_url.into(),
            storage_bucket: storage_bucket.into(),
            messaging_sender_id: None,
            custom_token: None,
            id_token: None,
            user: None,
        }
    }

    /// Set the messaging sender id.
    pub fn with_messaging_sender_id(mut self, id: impl Into<String>) -> Self {
        self.messaging_sender_id = Some(id.into());
        self
    }
}

impl std::fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("api_key", &self.api_key)
            .field("auth_domain", &self.auth_domain)
            .field("database_url", &self.database_url)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field(
                "custom_token",
                &self.custom_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("id_token", &self.id_token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user.as_ref().map(|_| "[AuthUser]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_name_from_domain() {
        assert_eq!(shop_name_from_domain("foo.myshopify.com"), "foo");
        assert_eq!(shop_name_from_domain("foo"), "foo");
    }

    #[test]
    fn test_shop_domain() {
        assert_eq!(shop_domain("foo"), "foo.myshopify.com");
    }

    #[test]
    fn test_set_shop_keeps_fields_consistent() {
        let mut config = ShopifyConfig::new("key", "https://");
        config.set_shop("foo.myshopify.com");
        assert_eq!(config.shop, "foo.myshopify.com");
        assert_eq!(config.shop_name, "foo");

        config.set_shop_name("bar");
        assert_eq!(config.shop, "bar.myshopify.com");
        assert_eq!(config.shop_name, "bar");
    }

    #[test]
    fn test_firebase_config_debug_redacts_tokens() {
        let mut config = FirebaseConfig::new("key", "app.firebaseapp.com", "db", "bucket");
        config.custom_token = Some("super_secret_custom_token".to_string());
        config.id_token = Some("super_secret_id_token".to_string());

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_custom_token"));
        assert!(!debug_output.contains("super_secret_id_token"));
    }
}
