//! Metafield operations.

use serde_json::{json, Value};
use tracing::instrument;

use crate::error::Result;

use super::EmbedRestClient;

impl EmbedRestClient {
    /// List the metafields attached to a product.
    #[instrument(skip(self))]
    pub async fn list_metafields_by_product(&self, product_id: u64) -> Result<Value> {
        self.api(
            "metafield",
            "list",
            &json!({
                "metafield": {
                    "owner_resource": "product",
                    "owner_id": product_id,
                }
            }),
        )
        .await
    }

    /// Delete a single metafield by id.
    #[instrument(skip(self))]
    pub async fn delete_metafield(&self, id: u64) -> Result<Value> {
        self.api("metafield", "delete", &json!(id)).await
    }

    /// Delete a batch of metafields by id.
    #[instrument(skip(self))]
    pub async fn delete_all_metafields(&self, ids: &[u64]) -> Result<Value> {
        self.api("metafield", "deleteAll", &json!({ "ids": ids }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::tests::{mount_bootstrap_mocks, test_client};

    #[tokio::test]
    async fn test_delete_metafield_sends_bare_id() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/metafield/delete"))
            .and(query_param("json", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 7})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        let payload = client.delete_metafield(7).await.unwrap();
        assert_eq!(payload["deleted"], 7);
    }

    #[tokio::test]
    async fn test_delete_all_metafields_sends_id_list() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/metafield/deleteAll"))
            .and(query_param("json", r#"{"ids":[1,2,3]}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 3})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        let payload = client.delete_all_metafields(&[1, 2, 3]).await.unwrap();
        assert_eq!(payload["deleted"], 3);
    }

    #[tokio::test]
    async fn test_list_metafields_scopes_to_the_product() {
        let server = MockServer::start().await;
        mount_bootstrap_mocks(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/acme/foo/metafield/list"))
            .and(query_param(
                "json",
                r#"{"metafield":{"owner_id":99,"owner_resource":"product"}}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .bootstrap("https://", "foo.myshopify.com", "foo")
            .await
            .unwrap();

        let payload = client.list_metafields_by_product(99).await.unwrap();
        assert_eq!(payload, json!([]));
    }
}
