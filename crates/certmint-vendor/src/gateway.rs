use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::VendorError;
use crate::minting::MintRequest;

/// Asset registered with the minting service, not yet minted
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    pub nft_uid: String,
    pub policy_id: Option<String>,
    pub raw: Value,
}

/// Result of a mint-and-send call
#[derive(Debug, Clone)]
pub struct MintReceipt {
    pub transaction_hash: Option<String>,
    pub policy_id: Option<String>,
    pub raw: Value,
}

/// Row of the minting service's wallet listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WalletAssetRow {
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "assetName", default)]
    pub asset_name: Option<String>,
}

/// Row of the indexer's address listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressAssetRow {
    pub unit: String,
    #[serde(default)]
    pub quantity: String,
}

/// Outbound calls to the minting service and the metadata indexer.
///
/// Each method performs exactly one HTTP request with its own timeout and never
/// retries.
#[async_trait]
pub trait VendorGateway: Send + Sync {
    /// Register a file with the minting project.
    async fn upload_asset(&self, request: &MintRequest) -> Result<UploadedAsset, VendorError>;

    /// Mint one unit of a registered asset and send it to `wallet_address`.
    async fn mint_and_send(
        &self,
        nft_uid: &str,
        wallet_address: &str,
    ) -> Result<MintReceipt, VendorError>;

    /// On-chain metadata for an asset, as returned by the indexer.
    async fn asset_metadata(&self, asset_id: &str) -> Result<Value, VendorError>;

    /// Assets held by a wallet according to the minting service.
    async fn wallet_assets(&self, address: &str) -> Result<Vec<WalletAssetRow>, VendorError>;

    /// Assets held by an address according to the indexer.
    async fn address_assets(&self, address: &str) -> Result<Vec<AddressAssetRow>, VendorError>;
}
