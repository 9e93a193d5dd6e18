use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use certmint_core::VendorConfig;

use crate::error::VendorError;
use crate::gateway::{AddressAssetRow, MintReceipt, UploadedAsset, VendorGateway, WalletAssetRow};
use crate::minting::MintRequest;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Base URLs, credentials, and timeouts for both vendors
#[derive(Clone)]
pub struct VendorEndpoints {
    pub minting_api_url: String,
    pub minting_api_key: String,
    pub minting_project_uid: String,
    pub indexer_api_url: String,
    pub indexer_project_id: String,
    pub blockchain: String,
    pub upload_timeout: Duration,
    pub request_timeout: Duration,
}

impl Debug for VendorEndpoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VendorEndpoints")
            .field("minting_api_url", &self.minting_api_url)
            .field("minting_project_uid", &self.minting_project_uid)
            .field("indexer_api_url", &self.indexer_api_url)
            .field("blockchain", &self.blockchain)
            .finish_non_exhaustive()
    }
}

impl From<&VendorConfig> for VendorEndpoints {
    fn from(config: &VendorConfig) -> Self {
        Self {
            minting_api_url: config.minting_api_url.trim_end_matches('/').to_string(),
            minting_api_key: config.minting_api_key.clone(),
            minting_project_uid: config.minting_project_uid.clone(),
            indexer_api_url: config.indexer_api_url.trim_end_matches('/').to_string(),
            indexer_project_id: config.indexer_project_id.clone(),
            blockchain: config.blockchain.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// [`VendorGateway`] over HTTP with a shared connection pool
pub struct HttpVendorGateway {
    pub(crate) http_client: reqwest::Client,
    pub(crate) endpoints: VendorEndpoints,
}

impl Debug for HttpVendorGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("HttpVendorGateway")
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl HttpVendorGateway {
    pub fn new(endpoints: VendorEndpoints) -> Result<Self> {
        // Per-call timeouts are set on each request.
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for vendor gateway")?;

        Ok(Self {
            http_client,
            endpoints,
        })
    }

    pub fn from_config(config: &VendorConfig) -> Result<Self> {
        Self::new(VendorEndpoints::from(config))
    }
}

/// Append `segments` to `base`, percent-encoding each value as a single path
/// segment. Empty, `.` and `..` segments are refused.
pub(crate) fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, VendorError> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(VendorError::InvalidRequest(format!(
            "path segment '{}' is not allowed",
            bad
        )));
    }

    let mut url = Url::parse(base)
        .map_err(|e| VendorError::InvalidRequest(format!("base URL '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| VendorError::InvalidRequest(format!("base URL '{}' cannot have a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Read a response body, mapping anything but 200 OK to [`VendorError::Status`]
/// and non-JSON bodies to [`VendorError::Decode`]. Returns the parsed value and
/// the raw text.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<(Value, String), VendorError> {
    let status = response.status();
    let body = response.text().await?;

    if status != reqwest::StatusCode::OK {
        return Err(VendorError::from_status(status.as_u16(), body));
    }

    let value = serde_json::from_str(&body)
        .map_err(|e| VendorError::Decode(format!("{} (status {})", e, status.as_u16())))?;
    Ok((value, body))
}

#[async_trait]
impl VendorGateway for HttpVendorGateway {
    async fn upload_asset(&self, request: &MintRequest) -> Result<UploadedAsset, VendorError> {
        self.upload_nft(request).await
    }

    async fn mint_and_send(
        &self,
        nft_uid: &str,
        wallet_address: &str,
    ) -> Result<MintReceipt, VendorError> {
        self.mint_and_send_specific(nft_uid, wallet_address).await
    }

    async fn asset_metadata(&self, asset_id: &str) -> Result<Value, VendorError> {
        self.get_asset(asset_id).await
    }

    async fn wallet_assets(&self, address: &str) -> Result<Vec<WalletAssetRow>, VendorError> {
        self.get_all_assets_in_wallet(address).await
    }

    async fn address_assets(&self, address: &str) -> Result<Vec<AddressAssetRow>, VendorError> {
        self.get_address_assets(address).await
    }
}
