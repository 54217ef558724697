/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gnosispay-sdk tests

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use gnosispay_sdk::{ClientConfig, GnosisPayClient};
use wiremock::MockServer;

/// Well-known development key (anvil/hardhat account #0)
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

pub const APP_URI: &str = "https://app.example.com/welcome";
pub const APP_DOMAIN: &str = "app.example.com";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with SIWE identity configured
pub fn test_client(server: &MockServer) -> GnosisPayClient {
    GnosisPayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_siwe_params(APP_URI)
        .expect("siwe params")
}

/// Unsigned JWT carrying the given claims
pub fn make_jwt(claims: serde_json::Value) -> String {
    let header = serde_json::json!({"alg": "HS256", "typ": "JWT"});
    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let claims_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header_b64}.{claims_b64}.signature")
}

/// JWT whose `exp` lies `offset` away from now
pub fn jwt_expiring_in(offset: Duration) -> String {
    make_jwt(serde_json::json!({"sub": "user-1", "exp": (Utc::now() + offset).timestamp()}))
}
