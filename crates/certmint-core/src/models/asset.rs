use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Upper bound on a wallet address, generous for bech32 Shelley addresses
pub const MAX_WALLET_ADDRESS_LEN: usize = 128;

/// Upper bound on an asset id: 28-byte policy id plus a 32-byte asset name, hex encoded
pub const MAX_ASSET_ID_LEN: usize = 120;

/// One wallet asset prepared for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WalletAssetEntry {
    /// Policy id and hex asset name concatenated (the vendor's `unit`)
    pub asset_id: String,
    pub name: String,
    pub file_name: String,
    /// Empty when the listing source carries no file metadata
    pub media_type: String,
    pub ipfs_link: String,
}

impl WalletAssetEntry {
    /// Entry carrying only an identifier and a name, as reported by the minting vendor
    pub fn named(asset_id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            asset_id: asset_id.into(),
            file_name: name.clone(),
            name,
            media_type: String::new(),
            ipfs_link: String::new(),
        }
    }
}

/// Wallet listing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    pub wallet_address: String,
    pub assets: Vec<WalletAssetEntry>,
}

/// Check a wallet address before it is used in a vendor request.
///
/// Accepts the bech32 address alphabet (`addr1...`, `addr_test1...`): lowercase
/// ASCII letters, digits and `_`.
pub fn validate_wallet_address(address: &str) -> Result<(), AppError> {
    if address.is_empty() || address.len() > MAX_WALLET_ADDRESS_LEN {
        return Err(AppError::InvalidInput(format!(
            "wallet_address must be 1 to {} characters",
            MAX_WALLET_ADDRESS_LEN
        )));
    }

    let valid = address
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if !valid {
        return Err(AppError::InvalidInput(
            "wallet_address may only contain lowercase letters, digits and '_'".to_string(),
        ));
    }

    Ok(())
}

/// Whether `asset_id` looks like a policy id followed by a hex asset name.
pub fn is_valid_asset_id(asset_id: &str) -> bool {
    !asset_id.is_empty()
        && asset_id.len() <= MAX_ASSET_ID_LEN
        && asset_id.bytes().all(|b| b.is_ascii_hexdigit())
}
