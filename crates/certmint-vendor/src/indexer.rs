//! Metadata indexer calls.

use serde_json::Value;

use crate::client::{endpoint_url, read_json, HttpVendorGateway};
use crate::error::VendorError;
use crate::gateway::AddressAssetRow;

const PROJECT_ID_HEADER: &str = "project_id";

impl HttpVendorGateway {
    #[tracing::instrument(skip(self), fields(vendor = "indexer"))]
    pub(crate) async fn get_asset(&self, asset_id: &str) -> Result<Value, VendorError> {
        let url = endpoint_url(&self.endpoints.indexer_api_url, &["assets", asset_id])?;

        let response = self
            .http_client
            .get(url)
            .header(PROJECT_ID_HEADER, self.endpoints.indexer_project_id.as_str())
            .timeout(self.endpoints.request_timeout)
            .send()
            .await?;

        let (raw, _) = read_json(response).await?;
        Ok(raw)
    }

    #[tracing::instrument(skip(self), fields(vendor = "indexer"))]
    pub(crate) async fn get_address_assets(
        &self,
        address: &str,
    ) -> Result<Vec<AddressAssetRow>, VendorError> {
        let url = endpoint_url(
            &self.endpoints.indexer_api_url,
            &["addresses", address, "assets"],
        )?;

        let response = self
            .http_client
            .get(url)
            .header(PROJECT_ID_HEADER, self.endpoints.indexer_project_id.as_str())
            .timeout(self.endpoints.request_timeout)
            .send()
            .await?;

        let (raw, _) = read_json(response).await?;
        parse_address_assets(raw)
    }
}

/// An empty wallet comes back as a list of bare strings rather than objects.
fn parse_address_assets(raw: Value) -> Result<Vec<AddressAssetRow>, VendorError> {
    if let Some(first) = raw.as_array().and_then(|items| items.first()) {
        if first.is_string() {
            return Ok(Vec::new());
        }
    }
    serde_json::from_value(raw).map_err(|e| VendorError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::gateway_for;
    use crate::gateway::VendorGateway;
    use mockito::Server;
    use serde_json::json;

    #[test]
    fn bare_string_lists_are_empty_wallets() {
        assert!(parse_address_assets(json!([""])).unwrap().is_empty());
        assert!(parse_address_assets(json!([])).unwrap().is_empty());
    }

    #[test]
    fn object_rows_are_parsed() {
        let rows = parse_address_assets(json!([
            {"unit": "lovelace", "quantity": "1000"},
            {"unit": "abc", "quantity": "1"}
        ]))
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].unit, "abc");
    }

    #[test]
    fn unexpected_shapes_are_decode_errors() {
        let err = parse_address_assets(json!({"unit": "abc"})).unwrap_err();
        assert!(matches!(err, VendorError::Decode(_)));
    }

    #[tokio::test]
    async fn asset_lookup_sends_project_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/assets/asset1")
            .match_header("project_id", "preprodTest")
            .with_status(200)
            .with_body(r#"{"asset":"asset1","onchain_metadata":{"name":"Cert"}}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url());
        let meta = gateway.asset_metadata("asset1").await.unwrap();

        assert_eq!(meta["onchain_metadata"]["name"], "Cert");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn asset_id_cannot_escape_the_assets_path() {
        let mut server = Server::new_async().await;
        let listing = server
            .mock("GET", "/addresses/addr1/assets")
            .with_status(200)
            .with_body("[]")
            .expect(0)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url());
        let result = gateway.asset_metadata("../addresses/addr1/assets").await;

        assert!(result.is_err());
        listing.assert_async().await;
    }

    #[tokio::test]
    async fn missing_asset_is_status_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/assets/unknown")
            .with_status(404)
            .with_body(r#"{"status_code":404,"error":"Not Found","message":"The requested component has not been found."}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url());
        let err = gateway.asset_metadata("unknown").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn address_listing_handles_empty_wallet_shape() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/addresses/addr_empty/assets")
            .with_status(200)
            .with_body(r#"[""]"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url());
        let rows = gateway.address_assets("addr_empty").await.unwrap();
        assert!(rows.is_empty());
    }
}
