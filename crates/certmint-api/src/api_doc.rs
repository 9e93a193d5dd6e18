//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use certmint_core::models;

/// Returns the OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Certmint API",
        version = "0.1.0",
        description = "Upload documents, mint them as NFTs through the minting service, list the wallet's assets, and share collections of assets by token."
    ),
    paths(
        handlers::upload::upload_and_mint,
        handlers::wallet::list_wallet,
        handlers::collection::create_collection,
        handlers::collection::view_collection,
    ),
    components(schemas(
        error::ErrorResponse,
        models::MintStage,
        models::MintSuccess,
        models::MintFailure,
        models::MintRawPayloads,
        models::WalletAssetEntry,
        models::WalletResponse,
        models::CreateCollectionRequest,
        models::CreateCollectionResponse,
        models::CollectionResponse,
    )),
    tags(
        (name = "mint", description = "Upload and mint"),
        (name = "wallet", description = "Wallet listing"),
        (name = "collections", description = "Shareable collections"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = get_openapi_spec();
        for path in ["/upload", "/", "/collection/new", "/collection/{share_token}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
