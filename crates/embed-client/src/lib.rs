//! # embed-client
//!
//! Core HTTP transport for the Shopify embedded-app backend.
//!
//! Every backend operation is a GET request that returns JSON; there are no
//! request bodies, no custom auth headers, and no retries. This crate
//! provides that transport plus the URL shapes of the two backend services.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (embed-auth, embed-rest)                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ShopClient                             │
//! │  - Holds the API proxy and auth microservice base URLs      │
//! │  - Builds backend request paths                             │
//! │  - Provides typed JSON methods (get_json, ...)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HttpTransport                           │
//! │  - One GET request, one JSON result                         │
//! │  - Status mapping (404 -> NotFound)                         │
//! │  - Connection pooling, timeouts, tracing                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use shopify_embed_client::{ShopClient, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shopify_embed_client::Error> {
//!     let client = ShopClient::new(
//!         "https://api.example.com",
//!         "https://auth.example.com",
//!     )?;
//!
//!     let products: serde_json::Value = client
//!         .get_json_with_query(
//!             &client.resource_url("my-app", "my-shop", "product", "listAll"),
//!             &[("json", r#"{"fields":"id,title"}"#.to_string())],
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod request;
mod response;
mod shop_client;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::RequestBuilder;
pub use response::Response;
pub use shop_client::ShopClient;
pub use transport::HttpTransport;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("shopify-embed-api/", env!("CARGO_PKG_VERSION"));
