//! Service wiring

use anyhow::{Context, Result};
use certmint_core::Config;
use certmint_db::{create_collection_store, CollectionStore, PgPool};
use certmint_vendor::{HttpVendorGateway, VendorGateway};
use std::sync::Arc;

use crate::services::{CollectionService, CredentialStatusNotifier, MintService, WalletLister};
use crate::state::{AppState, UploadLimits};

/// Build the application state from configuration.
pub fn initialize_services(config: &Config, pool: Option<PgPool>) -> Result<Arc<AppState>> {
    let gateway: Arc<dyn VendorGateway> = Arc::new(
        HttpVendorGateway::from_config(config.vendors()).context("Failed to create vendor gateway")?,
    );
    let store = create_collection_store(config, pool)?;

    tracing::info!(
        minting_api_url = %config.vendors().minting_api_url,
        indexer_api_url = %config.vendors().indexer_api_url,
        collection_store = store.backend_name(),
        wallet_listing_source = ?config.wallet_listing_source(),
        "Services initialized"
    );

    build_state(config, gateway, store)
}

/// Assemble the state around an existing gateway and store.
pub fn build_state(
    config: &Config,
    gateway: Arc<dyn VendorGateway>,
    store: Arc<dyn CollectionStore>,
) -> Result<Arc<AppState>> {
    let credential_status = config
        .credential_status_url()
        .map(CredentialStatusNotifier::new)
        .transpose()?;

    if credential_status.is_some() {
        tracing::info!("Credential status callback enabled");
    }

    Ok(Arc::new(AppState {
        config: config.clone(),
        mint: MintService::new(
            gateway.clone(),
            config.wallet_address(),
            config.mint_description(),
        ),
        wallet: WalletLister::new(
            gateway.clone(),
            config.wallet_address(),
            config.wallet_listing_source(),
            config.wallet_excluded_asset_names().to_vec(),
        ),
        collections: CollectionService::new(
            store,
            gateway,
            config.public_base_url().map(str::to_string),
        ),
        upload: UploadLimits::from_config(config),
        credential_status,
    }))
}
