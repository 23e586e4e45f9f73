//! Session bootstrap for Shopify embedded apps.
//!
//! This crate turns a fresh page load inside the Shopify admin iframe into
//! an authenticated backend session:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SessionBootstrapper                       │
//! │                                                              │
//! │  embedded? ──> host.init ──> host.ready ──> sign-in ──> ok   │
//! │      │                                         │             │
//! │      └───────────── OAuth redirect <───────────┘             │
//! └─────────────────────────────────────────────────────────────┘
//!          │                │                  │
//!     Browser seam     EmbedHost seam    AuthProvider seam
//! ```
//!
//! The browser window, the embedding host SDK, and the auth provider are
//! all external collaborators modeled as traits ([`Browser`],
//! [`EmbedHost`], [`AuthProvider`]); the crate ships observable stand-ins
//! ([`VirtualWindow`], [`SignalHost`]) for tests and headless use.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopify_embed_auth::{
//!     AppConfig, FirebaseConfig, SessionBootstrapper, ShopifyConfig,
//! };
//! use shopify_embed_client::ShopClient;
//!
//! let shop = ShopClient::new("https://api.example.com", "https://auth.example.com")?;
//! let bootstrapper = SessionBootstrapper::new(shop, host, provider, browser);
//!
//! let mut config = AppConfig::new(
//!     "my-app",
//!     ShopifyConfig::new("shopify-api-key", "https://"),
//!     FirebaseConfig::new("fb-key", "my-app.firebaseapp.com", "db-url", "bucket"),
//! );
//!
//! let payload = bootstrapper
//!     .bootstrap(&mut config, "https://", "foo.myshopify.com", "foo")
//!     .await?;
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod host;
pub mod provider;
pub mod query;
pub mod redirect;
pub mod session;

pub use browser::{is_embedded, Browser, Navigation, NavigationTarget, ProbeDenied, VirtualWindow};
pub use config::{shop_domain, shop_name_from_domain, AppConfig, FirebaseConfig, ShopifyConfig};
pub use error::{Error, ErrorKind, Result};
pub use host::{EmbedHost, HostInitConfig, SignalHost};
pub use provider::{AuthProvider, AuthUser};
pub use query::parse_query;
pub use redirect::Redirector;
pub use session::SessionBootstrapper;
