//! HTTP response handling.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::with_source(
                ErrorKind::Json(format!("Failed to parse response body: {}", e)),
                e,
            )
        })
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_json_parsing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "firebaseToken": "tok123"
            })))
            .mount(&mock_server)
            .await;

        let raw = reqwest::get(format!("{}/data", mock_server.uri()))
            .await
            .unwrap();
        let response = Response::new(raw);

        assert!(response.is_success());
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value["firebaseToken"], "tok123");
    }

    #[tokio::test]
    async fn test_json_parse_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let raw = reqwest::get(format!("{}/bad", mock_server.uri()))
            .await
            .unwrap();
        let response = Response::new(raw);

        let result = response.json::<serde_json::Value>().await;
        assert!(matches!(result.unwrap_err().kind, ErrorKind::Json(_)));
    }
}
