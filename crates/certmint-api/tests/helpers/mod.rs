//! Test helpers: build the router against a mockito vendor server and the
//! in-memory collection store.
//!
//! Run from workspace root: `cargo test -p certmint-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use certmint_api::setup::{routes, services};
use certmint_api::AppState;
use certmint_core::{Config, ServiceConfig};
use mockito::{Matcher, Mock, ServerGuard};
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_WALLET: &str = "addr_test1default";
pub const TEST_PROJECT_UID: &str = "proj-1";
pub const TEST_API_KEY: &str = "test-minting-key";

/// Test application: server plus the mock vendor it talks to.
pub struct TestApp {
    pub server: TestServer,
    pub vendor: ServerGuard,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Build the configuration used by every test app.
pub fn test_config(vendor_url: &str, overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("MINTING_API_URL", vendor_url),
        ("INDEXER_API_URL", vendor_url),
        ("MINTING_API_KEY", TEST_API_KEY),
        ("MINTING_PROJECT_UID", TEST_PROJECT_UID),
        ("INDEXER_PROJECT_ID", "preprodTest"),
        ("WALLET_ADDRESS", TEST_WALLET),
        ("COLLECTION_STORE", "memory"),
        ("ENVIRONMENT", "test"),
        ("UPLOAD_TIMEOUT_SECS", "5"),
        ("VENDOR_TIMEOUT_SECS", "5"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let config = ServiceConfig::from_source(|key| vars.get(key).cloned())
        .expect("test configuration should be valid");
    Config(Box::new(config))
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(&[]).await
}

pub async fn setup_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let vendor = mockito::Server::new_async().await;
    let config = test_config(&vendor.url(), overrides);

    let state = services::initialize_services(&config, None).expect("services");
    let router = routes::setup_routes(&config, state.clone()).expect("routes");
    let server = TestServer::new(router).expect("test server");

    TestApp {
        server,
        vendor,
        state,
    }
}

/// Mock a successful asset upload returning `nft_uid`.
pub async fn mock_upload_ok(vendor: &mut ServerGuard, nft_uid: &str) -> Mock {
    vendor
        .mock("POST", format!("/v2/UploadNft/{}", TEST_PROJECT_UID).as_str())
        .match_query(Matcher::UrlEncoded("uploadsource".into(), "api".into()))
        .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"nftUid":"{}","nftId":1}}"#, nft_uid))
        .create_async()
        .await
}

/// Mock a successful mint of `nft_uid` to `wallet`.
pub async fn mock_mint_ok(
    vendor: &mut ServerGuard,
    nft_uid: &str,
    wallet: &str,
    transaction_hash: &str,
) -> Mock {
    vendor
        .mock(
            "GET",
            format!(
                "/v2/MintAndSendSpecific/{}/{}/1/{}",
                TEST_PROJECT_UID, nft_uid, wallet
            )
            .as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"transactionHash":"{}","policyId":"pol1"}}"#,
            transaction_hash
        ))
        .create_async()
        .await
}

/// Mock indexer metadata for an asset carrying one file.
pub async fn mock_asset_metadata(vendor: &mut ServerGuard, asset_id: &str, name: &str) -> Mock {
    vendor
        .mock("GET", format!("/assets/{}", asset_id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "asset": asset_id,
                "onchain_metadata": {
                    "name": name,
                    "files": [{
                        "name": format!("{}.pdf", name),
                        "mediaType": "application/pdf",
                        "src": format!("ipfs://{}", asset_id)
                    }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await
}
