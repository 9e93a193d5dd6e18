//! Wallet listing for display.

use std::collections::HashSet;
use std::sync::Arc;

use certmint_core::models::WalletAssetEntry;
use certmint_core::WalletListingSource;
use certmint_vendor::{VendorError, VendorGateway};

use super::metadata::{asset_entry, first_file};

/// Native currency row included in every wallet listing
const LOVELACE_UNIT: &str = "lovelace";

#[derive(Clone)]
pub struct WalletLister {
    gateway: Arc<dyn VendorGateway>,
    address: String,
    source: WalletListingSource,
    excluded_names: HashSet<String>,
}

impl WalletLister {
    pub fn new(
        gateway: Arc<dyn VendorGateway>,
        address: impl Into<String>,
        source: WalletListingSource,
        excluded_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            gateway,
            address: address.into(),
            source,
            excluded_names: excluded_names.into_iter().collect(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Assets of the configured wallet. A failed listing call yields an empty list.
    #[tracing::instrument(skip(self), fields(wallet = %self.address, source = ?self.source))]
    pub async fn list(&self) -> Vec<WalletAssetEntry> {
        let result = match self.source {
            WalletListingSource::Minting => self.list_from_minting().await,
            WalletListingSource::Indexer => self.list_from_indexer().await,
        };

        match result {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Wallet assets listed");
                entries
            }
            Err(err) => {
                tracing::warn!(error = %err, status = ?err.status_code(), "Wallet listing failed");
                Vec::new()
            }
        }
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }

    async fn list_from_minting(&self) -> Result<Vec<WalletAssetEntry>, VendorError> {
        let rows = self.gateway.wallet_assets(&self.address).await?;

        Ok(rows
            .into_iter()
            .filter(|row| !row.unit.is_empty() && row.unit != LOVELACE_UNIT)
            .filter(|row| {
                row.asset_name
                    .as_deref()
                    .map_or(true, |name| !self.is_excluded(name))
            })
            .map(|row| WalletAssetEntry::named(row.unit, row.asset_name.unwrap_or_default()))
            .collect())
    }

    async fn list_from_indexer(&self) -> Result<Vec<WalletAssetEntry>, VendorError> {
        let rows = self.gateway.address_assets(&self.address).await?;
        let mut entries = Vec::new();

        for row in rows.into_iter().filter(|row| row.unit != LOVELACE_UNIT) {
            let metadata = match self.gateway.asset_metadata(&row.unit).await {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!(asset_id = %row.unit, error = %err, "Skipping asset with unreadable metadata");
                    continue;
                }
            };

            if first_file(&metadata).is_none() {
                continue;
            }

            let entry = asset_entry(&row.unit, &metadata);
            if self.is_excluded(&entry.name) || self.is_excluded(&entry.file_name) {
                continue;
            }
            entries.push(entry);
        }

        Ok(entries)
    }
}
