use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use certmint_core::models::{MintFailure, MintSuccess};
use certmint_core::AppError;

use crate::error::{ErrorResponse, HttpAppError, MintFailureResponse};
use crate::services::CredentialStatusNotifier;
use crate::state::AppState;
use crate::utils::upload::{extract_upload_form, validate_content_type, validate_file_size};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "mint",
    request_body(
        content = inline(Object),
        description = "Fields: file (required), wallet_address, credential_id",
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "File uploaded and minted", body = MintSuccess),
        (status = 400, description = "Missing file or disallowed content type", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Pipeline failure; vendor rejections carry the vendor's status", body = MintFailure)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_and_mint"))]
pub async fn upload_and_mint(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let form = extract_upload_form(multipart).await?;

    validate_file_size(form.file.bytes.len(), state.upload.max_file_size)?;
    validate_content_type(
        form.file.content_type.as_deref(),
        &state.upload.allowed_content_types,
    )?;

    if form.file.bytes.is_empty() {
        return Err(AppError::InvalidInput("Uploaded file is empty".to_string()).into());
    }

    tracing::info!(
        filename = %form.file.filename,
        size = form.file.bytes.len(),
        wallet_override = form.wallet_address.is_some(),
        "Upload received"
    );

    let outcome = state
        .mint
        .handle_upload(form.file, form.wallet_address.as_deref())
        .await;

    if let (Some(notifier), Some(credential_id)) =
        (state.credential_status.as_ref(), form.credential_id.as_deref())
    {
        notifier.notify(CredentialStatusNotifier::update_for(credential_id, &outcome));
    }

    Ok(match outcome {
        Ok(success) => Json(success).into_response(),
        Err(failure) => MintFailureResponse(failure).into_response(),
    })
}
