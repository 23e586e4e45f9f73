//! Product operations.

use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::error::Result;

use super::EmbedRestClient;

/// Cache operation key for the products listing.
const LIST_ALL_PRODUCTS: &str = "product.listAll";

impl EmbedRestClient {
    /// List all products, restricted to the given comma-separated fields.
    ///
    /// With `cache` set, a hit for the same `fields` selector returns the
    /// cached payload without issuing a request, and a successful fetch is
    /// stored for later calls. Different `fields` selectors cache
    /// independently.
    #[instrument(skip(self))]
    pub async fn list_all_products(&self, cache: bool, fields: &str) -> Result<Value> {
        if cache {
            if let Some(payload) = self.cache().get(LIST_ALL_PRODUCTS, fields) {
                debug!(%fields, "Products served from cache");
                return Ok(payload);
            }
        }

        let payload = self
            .api("product", "listAll", &json!({ "fields": fields }))
            .await?;

        if cache {
            self.cache().put(LIST_ALL_PRODUCTS, fields, payload.clone());
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::tests::{mount_bootstrap_mocks, test_client};

    #[tokio::test]
    async fn test_cache_hit_short_circuits_the_request() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/product/listAll"))
            .and(query_param("json", r#"{"fields":"id,title"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        let first = client.list_all_products(true, "id,title").await.unwrap();
        let second = client.list_all_products(true, "id,title").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_uncached_calls_always_fetch() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/product/listAll"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        client.list_all_products(false, "id").await.unwrap();
        client.list_all_products(false, "id").await.unwrap();
    }

    #[tokio::test]
    async fn test_fields_selectors_cache_independently() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/product/listAll"))
            .and(query_param("json", r#"{"fields":"id"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/product/listAll"))
            .and(query_param("json", r#"{"fields":"id,title"}"#))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "T"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        let ids = client.list_all_products(true, "id").await.unwrap();
        let titled = client.list_all_products(true, "id,title").await.unwrap();
        assert_ne!(ids, titled);

        // both selectors now served from cache
        client.list_all_products(true, "id").await.unwrap();
        client.list_all_products(true, "id,title").await.unwrap();
    }
}
