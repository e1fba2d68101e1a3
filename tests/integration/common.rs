// Common utilities for integration tests

use frisbo_client::prelude::*;
use mockito::{Mock, ServerGuard};

pub const TEST_TOKEN: &str = "test-token";
pub const ORG: u64 = 921;

/// Configuration using a pre-issued token against the mock server
pub fn token_config(server: &ServerGuard) -> Config {
    setup_logger();
    Config::from_access_token(TEST_TOKEN).with_base_url(&server.url())
}

/// Configuration logging in with email and password against the mock server
pub fn credentials_config(server: &ServerGuard) -> Config {
    setup_logger();
    Config::from_credentials("ops@shop.ro", "secret").with_base_url(&server.url())
}

/// Client with a pre-issued token; never calls the login endpoint
pub fn token_client(server: &ServerGuard) -> Client {
    Client::new_lazy(token_config(server)).expect("client")
}

/// Mocks a successful login returning `token`, expected to be hit `hits` times
pub async fn mock_login(
    server: &mut ServerGuard,
    token: &str,
    expires_in: i64,
    hits: usize,
) -> Mock {
    server
        .mock("POST", "/v1/auth/login")
        .match_body(mockito::Matcher::Json(json!({
            "email": "ops@shop.ro",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": token,
                "expires_in": expires_in,
                "token_type": "Bearer"
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

/// Organization-scoped path
pub fn org_path(rest: &str) -> String {
    format!("/v1/organizations/{ORG}{rest}")
}
