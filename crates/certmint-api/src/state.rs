//! Application state shared by all handlers.

use certmint_core::Config;

use crate::services::{CollectionService, CredentialStatusNotifier, MintService, WalletLister};

/// Limits applied to incoming uploads.
#[derive(Clone, Debug)]
pub struct UploadLimits {
    pub max_file_size: usize,
    /// Empty means any content type is accepted
    pub allowed_content_types: Vec<String>,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size_bytes(),
            allowed_content_types: config.allowed_content_types().to_vec(),
        }
    }
}

/// Main application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mint: MintService,
    pub wallet: WalletLister,
    pub collections: CollectionService,
    pub upload: UploadLimits,
    pub credential_status: Option<CredentialStatusNotifier>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
