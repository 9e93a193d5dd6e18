//! Upload-and-mint orchestration.
//!
//! One upload runs two vendor calls in sequence: register the file with the
//! minting project, then mint one unit and send it to the destination wallet.
//! Every outcome is either a [`MintSuccess`] or a [`MintFailure`] tagged with the
//! stage that failed. Nothing is retried or rolled back.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use certmint_core::models::{MintFailure, MintRawPayloads, MintSuccess, UploadedFile};
use certmint_vendor::{MintRequest, VendorError, VendorGateway};

#[derive(Clone)]
pub struct MintService {
    gateway: Arc<dyn VendorGateway>,
    default_wallet: String,
    description: String,
}

impl MintService {
    pub fn new(
        gateway: Arc<dyn VendorGateway>,
        default_wallet: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            default_wallet: default_wallet.into(),
            description: description.into(),
        }
    }

    /// Destination wallet: the caller's choice when non-blank, otherwise the default.
    pub fn resolve_wallet(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .unwrap_or(&self.default_wallet)
            .to_string()
    }

    /// Upload a file and mint it to `destination` (or the default wallet).
    ///
    /// Panics inside the pipeline are caught and reported as `stage=error`.
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename, size = file.bytes.len()))]
    pub async fn handle_upload(
        &self,
        file: UploadedFile,
        destination: Option<&str>,
    ) -> Result<MintSuccess, MintFailure> {
        match AssertUnwindSafe(self.run(file, destination))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(error = %message, "Upload pipeline panicked");
                Err(MintFailure::unexpected(message))
            }
        }
    }

    async fn run(
        &self,
        file: UploadedFile,
        destination: Option<&str>,
    ) -> Result<MintSuccess, MintFailure> {
        let wallet = self.resolve_wallet(destination);
        let request = MintRequest::from_upload(&file, &self.description);
        drop(file);

        let uploaded = match self.gateway.upload_asset(&request).await {
            Ok(uploaded) => uploaded,
            Err(VendorError::Status {
                status,
                message,
                body,
            }) => {
                tracing::warn!(status, error = %message, "Minting service rejected upload");
                return Err(MintFailure::upload_rejected(status, message, &body));
            }
            Err(VendorError::MissingField { field, body }) => {
                tracing::warn!(field, "Upload response lacked asset identifier");
                return Err(MintFailure::missing_identifier(&body));
            }
            Err(err) => {
                tracing::error!(error = %err, timed_out = err.is_timeout(), "Upload call failed");
                return Err(MintFailure::unexpected(err.to_string()));
            }
        };

        tracing::info!(nft_uid = %uploaded.nft_uid, "Asset uploaded");

        let receipt = match self.gateway.mint_and_send(&uploaded.nft_uid, &wallet).await {
            Ok(receipt) => receipt,
            Err(VendorError::Status {
                status,
                message,
                body,
            }) => {
                tracing::warn!(status, nft_uid = %uploaded.nft_uid, error = %message, "Minting service rejected mint");
                return Err(MintFailure::mint_rejected(status, message, &body));
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    timed_out = err.is_timeout(),
                    nft_uid = %uploaded.nft_uid,
                    "Mint call failed"
                );
                return Err(MintFailure::unexpected(err.to_string()));
            }
        };

        tracing::info!(
            nft_uid = %uploaded.nft_uid,
            wallet = %wallet,
            transaction_hash = ?receipt.transaction_hash,
            "Asset minted"
        );

        let policy_id = receipt.policy_id.or(uploaded.policy_id);
        Ok(MintSuccess::new(
            uploaded.nft_uid,
            receipt.transaction_hash,
            policy_id,
            wallet,
            MintRawPayloads {
                upload: uploaded.raw,
                mint: receipt.raw,
            },
        ))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic".to_string()
    }
}
