//! Credential-status callback.
//!
//! When configured, the outcome of each upload that names a credential is posted
//! to an external service. Delivery is fire-and-forget: failures are logged and
//! never affect the upload response.

use std::time::Duration;

use anyhow::{Context, Result};

use certmint_core::models::{
    CredentialStatus, CredentialStatusUpdate, MintFailure, MintSuccess,
};

const CALLBACK_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct CredentialStatusNotifier {
    http_client: reqwest::Client,
    url: String,
}

impl CredentialStatusNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CALLBACK_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for credential status callback")?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// Body describing an upload outcome.
    pub fn update_for(
        credential_id: &str,
        outcome: &Result<MintSuccess, MintFailure>,
    ) -> CredentialStatusUpdate {
        match outcome {
            Ok(success) => CredentialStatusUpdate {
                uuid: credential_id.to_string(),
                transaction_hash: success.transaction_hash.clone(),
                status: CredentialStatus::Completed,
            },
            Err(_) => CredentialStatusUpdate {
                uuid: credential_id.to_string(),
                transaction_hash: None,
                status: CredentialStatus::Failed,
            },
        }
    }

    /// Post the update in the background.
    pub fn notify(&self, update: CredentialStatusUpdate) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&update).await {
                tracing::warn!(
                    credential_id = %update.uuid,
                    error = %e,
                    "Failed to report credential status"
                );
            }
        });
    }

    /// Post the update and wait for the response.
    pub async fn send(&self, update: &CredentialStatusUpdate) -> Result<()> {
        let response = self
            .http_client
            .post(&self.url)
            .json(update)
            .send()
            .await
            .context("Failed to send credential status update")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Credential status callback failed: {} - {}",
                status,
                error_text
            ));
        }

        tracing::info!(
            credential_id = %update.uuid,
            status = ?update.status,
            "Credential status reported"
        );
        Ok(())
    }
}
