//! Resource client for Shopify embedded apps.
//!
//! Sits on top of the session bootstrap and exposes the proxied
//! Admin-API-style operations:
//!
//! - [`EmbedRestClient::api`]: generic `resource`/`method` calls with JSON
//!   parameters
//! - Product and metafield helpers ([`EmbedRestClient::list_all_products`],
//!   [`EmbedRestClient::list_metafields_by_product`], ...)
//! - An opt-in per-field payload cache ([`PayloadCache`])
//! - A ready gate: calls before the bootstrap completes fail fast or wait
//!   once, per [`NotReadyPolicy`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_embed_rest::EmbedRestClient;
//!
//! let client = EmbedRestClient::new(shop, config, host, provider, browser);
//!
//! client.bootstrap("https://", "foo.myshopify.com", "foo").await?;
//!
//! let products = client.list_all_products(true, "id,title,handle").await?;
//! let metafields = client.list_metafields_by_product(42).await?;
//! client.sign_out().await?;
//! ```

pub mod cache;
pub mod client;
pub mod error;

pub use cache::{MemoryCache, PayloadCache};
pub use client::{EmbedRestClient, NotReadyPolicy};
pub use error::{Error, ErrorKind, Result};
