//! Minting service calls: asset upload, mint-and-send, and wallet listing.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;

use certmint_core::models::UploadedFile;
use certmint_core::token_name;

use crate::client::{endpoint_url, read_json, HttpVendorGateway};
use crate::error::VendorError;
use crate::gateway::{MintReceipt, UploadedAsset, WalletAssetRow};

/// 1x1 PNG used as the preview image of every minted asset.
pub const TINY_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR4nGNgYAAAAAMAAWgmWQ0AAAAASUVORK5CYII=";

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Inline file in an upload payload
#[derive(Clone, Serialize)]
pub struct FilePayload {
    pub mimetype: String,
    #[serde(rename = "fileFromBase64")]
    pub file_from_base64: String,
}

/// Attached file with its description
#[derive(Clone, Serialize)]
pub struct SubfilePayload {
    pub subfile: FilePayload,
    pub description: String,
}

/// Body of the minting service's upload call
#[derive(Clone, Serialize)]
pub struct MintRequest {
    #[serde(rename = "tokenname")]
    pub token_name: String,
    #[serde(rename = "displayname")]
    pub display_name: String,
    pub description: String,
    #[serde(rename = "previewImageNft")]
    pub preview_image: FilePayload,
    pub subfiles: Vec<SubfilePayload>,
}

impl Debug for MintRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let encoded_len: usize = self
            .subfiles
            .iter()
            .map(|s| s.subfile.file_from_base64.len())
            .sum();
        f.debug_struct("MintRequest")
            .field("token_name", &self.token_name)
            .field("display_name", &self.display_name)
            .field("subfiles", &self.subfiles.len())
            .field("encoded_len", &encoded_len)
            .finish()
    }
}

impl MintRequest {
    /// Build the upload body for a received file.
    pub fn from_upload(file: &UploadedFile, description: &str) -> Self {
        let mimetype = file
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        Self {
            token_name: token_name(&file.filename),
            display_name: file.filename.clone(),
            description: description.to_string(),
            preview_image: FilePayload {
                mimetype: "image/png".to_string(),
                file_from_base64: TINY_PNG_B64.to_string(),
            },
            subfiles: vec![SubfilePayload {
                subfile: FilePayload {
                    mimetype,
                    file_from_base64: STANDARD.encode(&file.bytes),
                },
                description: file.filename.clone(),
            }],
        }
    }
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl HttpVendorGateway {
    #[tracing::instrument(skip(self, request), fields(vendor = "minting", token_name = %request.token_name))]
    pub(crate) async fn upload_nft(
        &self,
        request: &MintRequest,
    ) -> Result<UploadedAsset, VendorError> {
        let url = endpoint_url(
            &self.endpoints.minting_api_url,
            &["v2", "UploadNft", self.endpoints.minting_project_uid.as_str()],
        )?;

        let response = self
            .http_client
            .post(url)
            .query(&[("uploadsource", "api")])
            .bearer_auth(&self.endpoints.minting_api_key)
            .timeout(self.endpoints.upload_timeout)
            .json(request)
            .send()
            .await?;

        tracing::info!(status = response.status().as_u16(), "Minting service upload responded");

        let (raw, body) = read_json(response).await?;
        let nft_uid = string_field(&raw, "nftUid").ok_or(VendorError::MissingField {
            field: "nftUid",
            body,
        })?;

        Ok(UploadedAsset {
            nft_uid,
            policy_id: string_field(&raw, "policyId"),
            raw,
        })
    }

    #[tracing::instrument(skip(self), fields(vendor = "minting"))]
    pub(crate) async fn mint_and_send_specific(
        &self,
        nft_uid: &str,
        wallet_address: &str,
    ) -> Result<MintReceipt, VendorError> {
        let url = endpoint_url(
            &self.endpoints.minting_api_url,
            &[
                "v2",
                "MintAndSendSpecific",
                self.endpoints.minting_project_uid.as_str(),
                nft_uid,
                "1",
                wallet_address,
            ],
        )?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.endpoints.minting_api_key)
            .header(ACCEPT, "application/json")
            .timeout(self.endpoints.request_timeout)
            .send()
            .await?;

        tracing::info!(status = response.status().as_u16(), "Minting service mint responded");

        let (raw, _) = read_json(response).await?;
        Ok(MintReceipt {
            transaction_hash: string_field(&raw, "transactionHash"),
            policy_id: string_field(&raw, "policyId"),
            raw,
        })
    }

    #[tracing::instrument(skip(self), fields(vendor = "minting"))]
    pub(crate) async fn get_all_assets_in_wallet(
        &self,
        address: &str,
    ) -> Result<Vec<WalletAssetRow>, VendorError> {
        let url = endpoint_url(
            &self.endpoints.minting_api_url,
            &["v2", "GetAllAssetsInWallet", address],
        )?;

        let response = self
            .http_client
            .get(url)
            .query(&[("blockchain", self.endpoints.blockchain.as_str())])
            .bearer_auth(&self.endpoints.minting_api_key)
            .timeout(self.endpoints.request_timeout)
            .send()
            .await?;

        let (raw, _) = read_json(response).await?;
        serde_json::from_value(raw).map_err(|e| VendorError::Decode(e.to_string()))
    }
}
