//! Multipart parsing and validation for the upload endpoint.

use axum::extract::Multipart;
use certmint_core::models::{validate_wallet_address, UploadedFile};
use certmint_core::AppError;

use crate::constants::{CREDENTIAL_ID_FIELD, FILE_FIELD, WALLET_ADDRESS_FIELD};

/// Parsed upload form
#[derive(Debug)]
pub struct UploadForm {
    pub file: UploadedFile,
    pub wallet_address: Option<String>,
    pub credential_id: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extract the file and the optional text fields from a multipart form.
/// Only one field named "file" is accepted; unknown fields are ignored.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut wallet_address = None;
    let mut credential_id = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            FILE_FIELD => {
                if file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field.content_type().map(|s| s.to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                file = Some(UploadedFile {
                    bytes: data.to_vec(),
                    filename,
                    content_type,
                });
            }
            WALLET_ADDRESS_FIELD => {
                let value = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read {}: {}", WALLET_ADDRESS_FIELD, e))
                })?;
                wallet_address = non_blank(value);
                if let Some(address) = wallet_address.as_deref() {
                    validate_wallet_address(address)?;
                }
            }
            CREDENTIAL_ID_FIELD => {
                let value = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read {}: {}", CREDENTIAL_ID_FIELD, e))
                })?;
                credential_id = non_blank(value);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    Ok(UploadForm {
        file,
        wallet_address,
        credential_id,
    })
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "application/pdf; name=x" -> "application/pdf").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against the allowlist. An empty allowlist accepts anything.
pub fn validate_content_type(
    content_type: Option<&str>,
    allowed_types: &[String],
) -> Result<(), AppError> {
    if allowed_types.is_empty() {
        return Ok(());
    }

    let normalized = normalize_mime_type(content_type.unwrap_or("application/octet-stream"))
        .to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::InvalidInput(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}
