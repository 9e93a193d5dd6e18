use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// File received from a caller, held only until it is forwarded to the vendor
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: Option<String>,
}

/// Pipeline stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MintStage {
    Upload,
    Mint,
    Error,
}

impl fmt::Display for MintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MintStage::Upload => "upload",
            MintStage::Mint => "mint",
            MintStage::Error => "error",
        };
        f.write_str(s)
    }
}

/// Raw vendor payloads returned alongside a successful mint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MintRawPayloads {
    #[schema(value_type = Object)]
    pub upload: Value,
    #[schema(value_type = Object)]
    pub mint: Value,
}

/// Successful upload-and-mint result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MintSuccess {
    pub success: bool,
    pub status: String,
    pub nft_uid: String,
    pub asset_name: String,
    pub nft_asset_name: String,
    pub transaction_hash: Option<String>,
    pub policy_id: Option<String>,
    /// Wallet the asset was sent to
    pub wallet_address: String,
    pub raw: MintRawPayloads,
}

impl MintSuccess {
    pub fn new(
        nft_uid: String,
        transaction_hash: Option<String>,
        policy_id: Option<String>,
        wallet_address: String,
        raw: MintRawPayloads,
    ) -> Self {
        Self {
            success: true,
            status: "success".to_string(),
            asset_name: nft_uid.clone(),
            nft_asset_name: nft_uid.clone(),
            nft_uid,
            transaction_hash,
            policy_id,
            wallet_address,
            raw,
        }
    }
}

/// Stage-tagged failure of the upload-and-mint pipeline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("{stage} stage failed with status {status_code}: {error}")]
pub struct MintFailure {
    pub success: bool,
    pub stage: MintStage,
    /// HTTP status reported to the caller
    #[serde(skip)]
    pub status_code: u16,
    pub error: String,
    pub details: Option<String>,
    /// Vendor response body, parsed as JSON when possible
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub raw: Option<Value>,
}

impl MintFailure {
    fn new(stage: MintStage, status_code: u16, error: String, details: Option<String>) -> Self {
        Self {
            success: false,
            stage,
            status_code,
            error,
            details,
            raw: None,
        }
    }

    /// The minting vendor refused the asset upload.
    pub fn upload_rejected(status_code: u16, message: String, body: &str) -> Self {
        Self::new(
            MintStage::Upload,
            status_code,
            message,
            Some("check the minting project UID and API key".to_string()),
        )
        .with_raw(body)
    }

    /// The upload succeeded but the response carried no asset identifier.
    pub fn missing_identifier(body: &str) -> Self {
        Self::new(
            MintStage::Upload,
            500,
            "asset identifier missing".to_string(),
            None,
        )
        .with_raw(body)
    }

    /// The minting vendor refused the mint-and-send call.
    pub fn mint_rejected(status_code: u16, message: String, body: &str) -> Self {
        Self::new(
            MintStage::Mint,
            status_code,
            message,
            Some("Failed to mint NFT".to_string()),
        )
        .with_raw(body)
    }

    /// Anything else: transport failures, undecodable bodies, panics.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(
            MintStage::Error,
            500,
            message.into(),
            Some("An unexpected error occurred".to_string()),
        )
    }

    fn with_raw(mut self, body: &str) -> Self {
        if !body.is_empty() {
            let value = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
            self.raw = Some(value);
        }
        self
    }
}

/// Final state reported to the credential-status callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    Completed,
    Failed,
}

/// Body posted to the credential-status callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialStatusUpdate {
    pub uuid: String,
    pub transaction_hash: Option<String>,
    pub status: CredentialStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_mirrors_uid_into_asset_names() {
        let success = MintSuccess::new(
            "abc123".to_string(),
            Some("deadbeef".to_string()),
            None,
            "addr_test1".to_string(),
            MintRawPayloads {
                upload: json!({"nftUid": "abc123"}),
                mint: json!({}),
            },
        );
        let value = serde_json::to_value(&success).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["status"], "success");
        assert_eq!(value["asset_name"], "abc123");
        assert_eq!(value["nft_asset_name"], "abc123");
        assert_eq!(value["transaction_hash"], "deadbeef");
    }

    #[test]
    fn failure_serializes_stage_and_omits_status() {
        let failure = MintFailure::upload_rejected(401, "Unauthorized".to_string(), "Unauthorized");
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["stage"], "upload");
        assert_eq!(value["error"], "Unauthorized");
        assert_eq!(value["raw"], "Unauthorized");
        assert!(value.get("status_code").is_none());
        assert_eq!(failure.status_code, 401);
    }

    #[test]
    fn json_bodies_are_kept_structured() {
        let failure = MintFailure::missing_identifier(r#"{"nftId": 7}"#);
        assert_eq!(failure.status_code, 500);
        assert_eq!(failure.raw, Some(json!({"nftId": 7})));
    }

    #[test]
    fn unexpected_failures_have_no_raw_body() {
        let failure = MintFailure::unexpected("connection reset");
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["stage"], "error");
        assert!(value.get("raw").is_none());
        assert_eq!(
            failure.to_string(),
            "error stage failed with status 500: connection reset"
        );
    }

    #[test]
    fn credential_status_uses_lowercase_names() {
        let update = CredentialStatusUpdate {
            uuid: "c-1".to_string(),
            transaction_hash: None,
            status: CredentialStatus::Failed,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["status"], "failed");
        assert!(value["transaction_hash"].is_null());
    }
}
