//! HTTP client for the Certmint API.
//!
//! Responses are returned as JSON values so that pipeline failures, which carry
//! their own body shape, print the same way as successes.

use anyhow::{Context, Result};
use certmint_core::models::{CreateCollectionRequest, UploadedFile};
use reqwest::{Client, Response};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Upload requests wait for both vendor calls, so they get a long timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: CERTMINT_API_URL (or API_URL).
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CERTMINT_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a local file and mint it, optionally to another wallet and on
    /// behalf of a credential.
    pub async fn upload(
        &self,
        file_path: &Path,
        wallet_address: Option<&str>,
        credential_id: Option<&str>,
    ) -> Result<Value> {
        let file = read_upload(file_path)?;

        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .context("Invalid content type")?;
        }

        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(wallet) = wallet_address {
            form = form.text("wallet_address", wallet.to_string());
        }
        if let Some(id) = credential_id {
            form = form.text("credential_id", id.to_string());
        }

        let response = self
            .client
            .post(self.build_url("/upload"))
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        // Failed mints still carry a structured body worth printing.
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// List the assets held by the server's wallet.
    pub async fn wallet(&self) -> Result<Value> {
        let response = self
            .client
            .get(self.build_url("/"))
            .send()
            .await
            .context("Failed to send request")?;
        json_or_error(response).await
    }

    /// Store a collection of asset ids and return its share token and link.
    pub async fn create_collection(&self, asset_ids: Vec<String>) -> Result<Value> {
        let body = CreateCollectionRequest {
            selected_assets: asset_ids,
        };
        let response = self
            .client
            .post(self.build_url("/collection/new"))
            .json(&body)
            .send()
            .await
            .context("Failed to send request")?;
        json_or_error(response).await
    }

    /// Fetch a collection with its resolved asset metadata.
    pub async fn get_collection(&self, share_token: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.build_url(&format!("/collection/{}", share_token)))
            .send()
            .await
            .context("Failed to send request")?;
        json_or_error(response).await
    }
}

async fn json_or_error(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(anyhow::anyhow!(
            "API request failed with status {}: {}",
            status,
            error_text
        ));
    }

    response
        .json()
        .await
        .context("Failed to parse response as JSON")
}

fn read_upload(path: &Path) -> Result<UploadedFile> {
    if path
        .components()
        .any(|c| c == std::path::Component::ParentDir)
    {
        return Err(anyhow::anyhow!("Invalid input: {}", path.display()));
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();
    let content_type = guess_content_type(&filename).map(str::to_string);

    Ok(UploadedFile {
        bytes,
        filename,
        content_type,
    })
}

fn guess_content_type(filename: &str) -> Option<&'static str> {
    let extension = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "json" => Some("application/json"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}
