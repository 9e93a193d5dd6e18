//! Collection creation and hydration.

use std::sync::Arc;

use futures::{stream, StreamExt};

use certmint_core::models::{
    validate_asset_ids, CollectionResponse, CreateCollectionResponse, WalletAssetEntry,
};
use certmint_core::AppError;
use certmint_db::CollectionStore;
use certmint_vendor::VendorGateway;

use super::metadata::asset_entry;
use crate::constants::HYDRATION_CONCURRENCY;

#[derive(Clone)]
pub struct CollectionService {
    store: Arc<dyn CollectionStore>,
    gateway: Arc<dyn VendorGateway>,
    public_base_url: Option<String>,
}

impl CollectionService {
    pub fn new(
        store: Arc<dyn CollectionStore>,
        gateway: Arc<dyn VendorGateway>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            public_base_url,
        }
    }

    pub fn store(&self) -> &Arc<dyn CollectionStore> {
        &self.store
    }

    /// Shareable link for a token. `request_base` is used when no public base URL
    /// is configured.
    pub fn share_link(&self, share_token: &str, request_base: &str) -> String {
        let base = self
            .public_base_url
            .as_deref()
            .unwrap_or(request_base)
            .trim_end_matches('/');
        format!("{}/collection/{}", base, share_token)
    }

    /// Validate and store a list of asset ids.
    pub async fn create(
        &self,
        asset_ids: Vec<String>,
        request_base: &str,
    ) -> Result<CreateCollectionResponse, AppError> {
        validate_asset_ids(&asset_ids)?;

        let collection = self.store.create(&asset_ids).await?;
        let link = self.share_link(&collection.share_token, request_base);

        Ok(CreateCollectionResponse {
            ok: true,
            share_token: collection.share_token,
            link,
        })
    }

    /// Load a collection and resolve each asset's metadata, in stored order.
    ///
    /// Assets whose lookup fails are left out of the view.
    pub async fn view(&self, share_token: &str) -> Result<CollectionResponse, AppError> {
        let collection = self
            .store
            .get(share_token)
            .await?
            .ok_or_else(|| AppError::NotFound("collection not found".to_string()))?;

        let resolved: Vec<Option<WalletAssetEntry>> = stream::iter(collection.asset_ids)
            .map(|asset_id| {
                let gateway = self.gateway.clone();
                async move {
                    match gateway.asset_metadata(&asset_id).await {
                        Ok(metadata) => Some(asset_entry(&asset_id, &metadata)),
                        Err(err) => {
                            tracing::warn!(asset_id = %asset_id, error = %err, "Skipping asset whose metadata failed to load");
                            None
                        }
                    }
                }
            })
            .buffered(HYDRATION_CONCURRENCY)
            .collect()
            .await;

        Ok(CollectionResponse {
            share_token: collection.share_token,
            assets: resolved.into_iter().flatten().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use certmint_db::InMemoryCollectionStore;
    use certmint_vendor::{
        AddressAssetRow, MintReceipt, MintRequest, UploadedAsset, VendorError, WalletAssetRow,
    };
    use serde_json::{json, Value};

    struct MetadataGateway;

    #[async_trait]
    impl VendorGateway for MetadataGateway {
        async fn upload_asset(&self, _request: &MintRequest) -> Result<UploadedAsset, VendorError> {
            unreachable!()
        }

        async fn mint_and_send(&self, _nft_uid: &str, _wallet: &str) -> Result<MintReceipt, VendorError> {
            unreachable!()
        }

        async fn asset_metadata(&self, asset_id: &str) -> Result<Value, VendorError> {
            if asset_id == "dead" {
                return Err(VendorError::from_status(404, "Not Found".to_string()));
            }
            Ok(json!({
                "onchain_metadata": {
                    "name": format!("Name {}", asset_id),
                    "files": [{"name": format!("{}.pdf", asset_id), "mediaType": "application/pdf", "src": "ipfs://Qm"}]
                }
            }))
        }

        async fn wallet_assets(&self, _address: &str) -> Result<Vec<WalletAssetRow>, VendorError> {
            Ok(Vec::new())
        }

        async fn address_assets(&self, _address: &str) -> Result<Vec<AddressAssetRow>, VendorError> {
            Ok(Vec::new())
        }
    }

    fn service(public_base_url: Option<&str>) -> CollectionService {
        CollectionService::new(
            Arc::new(InMemoryCollectionStore::new()),
            Arc::new(MetadataGateway),
            public_base_url.map(str::to_string),
        )
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn create_returns_token_and_link() {
        let svc = service(None);
        let created = svc
            .create(ids(&["a1", "b2"]), "http://localhost:8001")
            .await
            .unwrap();

        assert!(created.ok);
        assert_eq!(created.share_token.len(), 14);
        assert_eq!(
            created.link,
            format!("http://localhost:8001/collection/{}", created.share_token)
        );
    }

    #[tokio::test]
    async fn configured_base_url_wins() {
        let svc = service(Some("https://certs.example.com/"));
        assert_eq!(
            svc.share_link("tok", "http://internal:8001"),
            "https://certs.example.com/collection/tok"
        );
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let err = service(None).create(Vec::new(), "http://h").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn view_preserves_order_and_skips_failed_lookups() {
        let svc = service(None);
        let created = svc
            .create(ids(&["bb", "dead", "aa"]), "http://h")
            .await
            .unwrap();

        let view = svc.view(&created.share_token).await.unwrap();
        let asset_ids: Vec<&str> = view.assets.iter().map(|a| a.asset_id.as_str()).collect();
        assert_eq!(asset_ids, vec!["bb", "aa"]);
        assert_eq!(view.assets[0].file_name, "bb.pdf");
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let err = service(None).view("nope").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "collection not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
