//! Error types for embed-auth.
//!
//! Error messages are designed to avoid exposing token material: the ID
//! token rides in the init URL, so anything derived from a transport error
//! is sanitized before it is stored.

/// Result type alias for embed-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for embed-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Convenience constructor for auth-provider failures.
    ///
    /// Provider implementations (custom-token sign-in, ID-token refresh)
    /// should report their failures through this.
    pub fn auth_provider(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthProvider(message.into()))
    }

    /// Returns true if the backend reported that no token exists for the
    /// shop, by either of the two signaling forms.
    pub fn is_token_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::TokenNotFound)
    }

    /// Returns true if the page is not framed by the admin shell.
    pub fn is_not_embedded(&self) -> bool {
        matches!(self.kind, ErrorKind::NotEmbedded)
    }
}

/// The kind of error that occurred.
///
/// `NotEmbedded` and `TokenNotFound` always coincide with an OAuth
/// redirect, so callers rarely get to observe them: the page is already
/// navigating away when the future rejects.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The page is not running inside the admin shell's iframe.
    #[error("Not embedded in the admin shell")]
    NotEmbedded,

    /// The auth microservice has no custom token for this shop.
    #[error("No auth token found for this shop")]
    TokenNotFound,

    /// The auth provider failed during custom-token sign-in or ID-token
    /// refresh.
    #[error("Auth provider error: {0}")]
    AuthProvider(String),

    /// The backend session init call failed.
    #[error("Backend session init failed: {0}")]
    BackendInit(String),

    /// Generic transport failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Strip messages that could carry token material.
///
/// Transport errors may embed the full request URL, and the init URL
/// carries the ID token as a path segment. Only those messages are
/// redacted; the word "token" alone is not sensitive (the token lookup
/// URL contains no credential).
pub(crate) fn sanitize(message: String) -> String {
    if message.contains("/init/") {
        "request failed (details redacted for security)".to_string()
    } else {
        message
    }
}

impl From<shopify_embed_client::Error> for Error {
    fn from(err: shopify_embed_client::Error) -> Self {
        Error::with_source(ErrorKind::Transport(sanitize(err.to_string())), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        let err = ErrorKind::NotEmbedded;
        assert_eq!(err.to_string(), "Not embedded in the admin shell");

        let err = ErrorKind::TokenNotFound;
        assert_eq!(err.to_string(), "No auth token found for this shop");

        let err = ErrorKind::AuthProvider("sign-in rejected".to_string());
        assert_eq!(err.to_string(), "Auth provider error: sign-in rejected");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::new(ErrorKind::TokenNotFound).is_token_not_found());
        assert!(Error::new(ErrorKind::NotEmbedded).is_not_embedded());
        assert!(!Error::auth_provider("boom").is_token_not_found());
    }

    #[test]
    fn test_sanitize_redacts_init_urls() {
        let message = "GET https://api.example.com/api/acme/foo/init/idtok456 failed".to_string();
        let sanitized = sanitize(message);
        assert!(!sanitized.contains("idtok456"));

        let plain = "connection refused".to_string();
        assert_eq!(sanitize(plain), "connection refused");
    }

    #[test]
    fn test_sanitize_keeps_token_endpoint_messages() {
        // The token lookup URL carries no credential, so messages that
        // merely mention it must keep their detail.
        let message = "GET https://auth.example.com/auth/acme/foo/token refused".to_string();
        assert_eq!(
            sanitize(message),
            "GET https://auth.example.com/auth/acme/foo/token refused"
        );

        let plain = "token endpoint unreachable".to_string();
        assert_eq!(sanitize(plain.clone()), plain);
    }

    #[test]
    fn test_from_client_error_sanitizes() {
        let client_err = shopify_embed_client::Error::new(
            shopify_embed_client::ErrorKind::Connection(
                "https://api.example.com/api/acme/foo/init/idtok456 refused".to_string(),
            ),
        );
        let err: Error = client_err.into();
        assert!(!err.to_string().contains("idtok456"));
        assert!(err.source.is_some());
    }
}
