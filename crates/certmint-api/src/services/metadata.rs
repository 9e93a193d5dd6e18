//! Mapping of indexer asset metadata onto display entries.

use certmint_core::models::WalletAssetEntry;
use serde_json::Value;

/// First entry of the asset's on-chain `files` list.
pub fn first_file(metadata: &Value) -> Option<&Value> {
    metadata
        .get("onchain_metadata")
        .and_then(|m| m.get("files"))
        .and_then(Value::as_array)
        .and_then(|files| files.first())
}

/// Long metadata strings may be split into arrays of chunks.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}

/// Display entry for an asset. File fields are empty when no file is declared.
pub fn asset_entry(asset_id: &str, metadata: &Value) -> WalletAssetEntry {
    let name = text(metadata.get("onchain_metadata").and_then(|m| m.get("name")));
    let file = first_file(metadata);

    WalletAssetEntry {
        asset_id: asset_id.to_string(),
        name,
        file_name: text(file.and_then(|f| f.get("name"))),
        media_type: text(file.and_then(|f| f.get("mediaType"))),
        ipfs_link: text(file.and_then(|f| f.get("src"))),
    }
}
