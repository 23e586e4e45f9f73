//! Auth provider seam.
//!
//! The auth provider (Firebase) is an external collaborator: this module
//! models only the two calls the bootstrap needs, custom-token sign-in and
//! ID-token refresh. Implementations should report failures through
//! [`Error::auth_provider`](crate::Error::auth_provider).

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::FirebaseConfig;
use crate::error::Result;

/// An authenticated user handle returned by the provider.
#[async_trait]
pub trait AuthUser: Send + Sync {
    /// Mint an ID token for this user.
    ///
    /// `force_refresh` bypasses any token the provider may have cached.
    /// The bootstrap always forces a fresh one: the backend verifies the
    /// token server-side and a stale one would fail the session init.
    async fn id_token(&self, force_refresh: bool) -> Result<String>;
}

/// The auth provider's app surface.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Prepare the provider app instance for this config.
    ///
    /// Idempotent; the bootstrap calls it once at the start of every
    /// sign-in before any token exchange.
    fn initialize(&self, config: &FirebaseConfig) -> Result<()>;

    /// Exchange a one-time custom token for an authenticated user handle.
    async fn sign_in_with_custom_token(&self, custom_token: &str) -> Result<Arc<dyn AuthUser>>;
}
