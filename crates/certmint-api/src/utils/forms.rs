//! Request extractors for the collection endpoints.

use axum::{
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form,
};
use certmint_core::models::CreateCollectionRequest;

use crate::constants::SELECTED_ASSETS_FIELD;
use crate::error::{HttpAppError, ValidatedJson};

/// Asset ids submitted either as a form (`selected_assets` repeated) or as JSON
/// `{"selected_assets": [...]}`.
#[derive(Debug, Clone)]
pub struct SelectedAssets(pub Vec<String>);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S> FromRequest<S> for SelectedAssets
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            let ValidatedJson(body) =
                ValidatedJson::<CreateCollectionRequest>::from_request(req, state).await?;
            return Ok(SelectedAssets(body.selected_assets));
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;

        Ok(SelectedAssets(
            pairs
                .into_iter()
                .filter(|(key, _)| key == SELECTED_ASSETS_FIELD)
                .map(|(_, value)| value)
                .collect(),
        ))
    }
}

/// Base URL the client used to reach this server, for building share links.
pub fn request_base_url(headers: &HeaderMap, fallback_port: u16) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|s| *s == "http" || *s == "https")
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", fallback_port));
    format!("{}://{}", scheme, host)
}
