//! # shopify-embed-api
//!
//! A client SDK for Shopify embedded apps in Rust.
//!
//! Embedded apps run inside the Shopify admin's iframe and talk to their
//! own backend microservices: an auth service that mints one-time custom
//! tokens and hosts the OAuth redirect, and an API proxy that fronts the
//! Shopify Admin API. This library covers the client side of that setup,
//! from frame detection on page load to ready-gated resource calls.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - Sensitive data (custom tokens, ID tokens) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **shopify-embed-client** - HTTP transport and backend URL shapes
//! - **shopify-embed-auth** - Session bootstrap: frame detection, host SDK
//!   handshake, custom-token exchange, OAuth redirect
//! - **shopify-embed-rest** - Resource client: ready-gated API proxy calls,
//!   payload cache, product and metafield helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopify_embed_api::auth::{AppConfig, FirebaseConfig, ShopifyConfig};
//! use shopify_embed_api::client::ShopClient;
//! use shopify_embed_api::rest::EmbedRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let shop = ShopClient::new(
//!         "https://api.example.com",
//!         "https://auth.example.com",
//!     )?;
//!
//!     let config = AppConfig::new(
//!         "my-app",
//!         ShopifyConfig::new("shopify-api-key", "https://"),
//!         FirebaseConfig::new("fb-key", "my-app.firebaseapp.com", "db-url", "bucket"),
//!     );
//!
//!     // host, provider, browser: your embedding glue
//!     let client = EmbedRestClient::new(shop, config, host, provider, browser);
//!
//!     client.bootstrap("https://", "foo.myshopify.com", "foo").await?;
//!
//!     let products = client.list_all_products(true, "id,title").await?;
//!     println!("{}", products);
//!
//!     Ok(())
//! }
//! ```

// Re-export the member crates for convenient access
#[cfg(feature = "auth")]
pub use shopify_embed_auth as auth;
#[cfg(feature = "client")]
pub use shopify_embed_client as client;
#[cfg(feature = "rest")]
pub use shopify_embed_rest as rest;
