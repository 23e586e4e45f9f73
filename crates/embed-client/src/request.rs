//! HTTP request building.
//!
//! The entire backend surface is plain GET with query parameters (the
//! microservice accepts no bodies and no custom headers), so the builder
//! only models URLs, headers, and query strings.

use std::collections::HashMap;

/// Builder for GET requests against the backend microservices.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Create a new request builder for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter. Values are percent-encoded on send.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new("https://example.com/api")
            .header("X-Custom", "value")
            .query("json", r#"{"fields":"id,title"}"#);

        assert_eq!(req.url, "https://example.com/api");
        assert_eq!(req.headers.get("X-Custom"), Some(&"value".to_string()));
        assert_eq!(req.query_params.len(), 1);
        assert_eq!(req.query_params[0].0, "json");
    }
}
