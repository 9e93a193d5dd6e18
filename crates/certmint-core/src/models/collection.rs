use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::asset::{is_valid_asset_id, WalletAssetEntry};
use crate::error::AppError;

/// Maximum number of asset ids accepted in one collection
pub const MAX_COLLECTION_ASSETS: usize = 1000;

const MAX_ECHOED_ID_CHARS: usize = 64;

/// Collection entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub share_token: String,
    /// Asset ids in the order they were submitted
    pub asset_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a collection
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateCollectionRequest {
    /// Asset ids to include, in display order
    pub selected_assets: Vec<String>,
}

impl CreateCollectionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_asset_ids(&self.selected_assets)
    }
}

/// Check a submitted id list before it is stored.
pub fn validate_asset_ids(asset_ids: &[String]) -> Result<(), AppError> {
    if asset_ids.is_empty() {
        return Err(AppError::InvalidInput(
            "selected_assets must contain at least one asset id".to_string(),
        ));
    }

    if asset_ids.len() > MAX_COLLECTION_ASSETS {
        return Err(AppError::InvalidInput(format!(
            "selected_assets may contain at most {} asset ids",
            MAX_COLLECTION_ASSETS
        )));
    }

    if asset_ids.iter().any(|id| id.trim().is_empty()) {
        return Err(AppError::InvalidInput(
            "selected_assets must not contain blank asset ids".to_string(),
        ));
    }

    if let Some(bad) = asset_ids.iter().find(|id| !is_valid_asset_id(id)) {
        return Err(AppError::InvalidInput(format!(
            "asset id '{}' is not a hex asset id",
            bad.chars().take(MAX_ECHOED_ID_CHARS).collect::<String>()
        )));
    }

    Ok(())
}

/// Response after a collection is stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCollectionResponse {
    pub ok: bool,
    pub share_token: String,
    /// Absolute URL of the shared view
    pub link: String,
}

/// Hydrated collection view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollectionResponse {
    pub share_token: String,
    /// Assets whose metadata resolved; failed lookups are omitted
    pub assets: Vec<WalletAssetEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accepts_ordinary_lists() {
        assert!(validate_asset_ids(&ids(&["a1b2", "c3d4"])).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        let err = validate_asset_ids(&[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(validate_asset_ids(&ids(&["a1b2", "  "])).is_err());
    }

    #[test]
    fn rejects_non_hex_ids() {
        for bad in ["../addresses/addr1/assets", "a1b2?x=1", "a1b2/c3", "asset-a"] {
            let err = validate_asset_ids(&ids(&["a1b2", bad])).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{bad}");
        }
    }

    #[test]
    fn rejects_oversized_lists() {
        let many: Vec<String> = (0..=MAX_COLLECTION_ASSETS).map(|i| format!("{i:04x}")).collect();
        assert!(validate_asset_ids(&many).is_err());
        assert!(validate_asset_ids(&many[..MAX_COLLECTION_ASSETS]).is_ok());
    }
}
