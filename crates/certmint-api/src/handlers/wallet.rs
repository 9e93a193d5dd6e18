use std::sync::Arc;

use axum::{extract::State, Json};
use certmint_core::models::WalletResponse;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "wallet",
    responses(
        (status = 200, description = "Assets held by the configured wallet; empty when the listing call fails", body = WalletResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_wallet"))]
pub async fn list_wallet(State(state): State<Arc<AppState>>) -> Json<WalletResponse> {
    let assets = state.wallet.list().await;
    Json(WalletResponse {
        wallet_address: state.wallet.address().to_string(),
        assets,
    })
}
