//! Error types for embed-rest.

/// Result type alias for embed-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for embed-rest operations.
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

    /// Returns true if the client has not completed its bootstrap yet.
    pub fn is_not_ready(&self) -> bool {
        matches!(self.kind, ErrorKind::NotReady)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// An API call was made before the bootstrap completed.
    #[error("Client is not ready: bootstrap has not completed")]
    NotReady,

    /// The bootstrap sequence failed.
    #[error("Bootstrap failed: {0}")]
    Bootstrap(String),

    /// Transport failure on an API proxy call.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request parameters could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<shopify_embed_auth::Error> for Error {
    fn from(err: shopify_embed_auth::Error) -> Self {
        Error::with_source(ErrorKind::Bootstrap(err.to_string()), err)
    }
}

impl From<shopify_embed_client::Error> for Error {
    fn from(err: shopify_embed_client::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
