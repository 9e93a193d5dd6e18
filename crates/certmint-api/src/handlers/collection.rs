use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use certmint_core::models::{CollectionResponse, CreateCollectionRequest, CreateCollectionResponse};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::forms::{request_base_url, SelectedAssets};

#[utoipa::path(
    post,
    path = "/collection/new",
    tag = "collections",
    request_body(
        content = CreateCollectionRequest,
        description = "JSON body, or a urlencoded form with `selected_assets` repeated",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Collection stored", body = CreateCollectionResponse),
        (status = 400, description = "Empty, oversized, or malformed selection", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, headers, selected),
    fields(asset_count = selected.0.len(), operation = "create_collection")
)]
pub async fn create_collection(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    selected: SelectedAssets,
) -> Result<impl IntoResponse, HttpAppError> {
    let base = request_base_url(&headers, state.config.server_port());
    let created = state.collections.create(selected.0, &base).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/collection/{share_token}",
    tag = "collections",
    params(
        ("share_token" = String, Path, description = "Share token returned at creation")
    ),
    responses(
        (status = 200, description = "Collection with resolved asset metadata", body = CollectionResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "view_collection"))]
pub async fn view_collection(
    State(state): State<Arc<AppState>>,
    Path(share_token): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let view = state.collections.view(&share_token).await?;
    Ok(Json(view))
}
