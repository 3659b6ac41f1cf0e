//! End-to-end tests for the auth callback flow
//!
//! Runs the real router against a wiremock backend standing in for the
//! hosted identity provider and partner store, and asserts on the redirect
//! the gateway answers with.

use std::sync::Arc;

use cardmatch_gateway::cli::{build_router, AppState};
use cardmatch_gateway::http::{HttpClient, HttpClientConfig};
use cardmatch_gateway::identity::HostedAuthClient;
use cardmatch_gateway::partner::RestPartnerStore;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: &str = "https://cardmatch.example";

/// Spin up the gateway against the given mock backend, returning its base URL
async fn start_gateway(backend: &MockServer) -> String {
    let client = |server: &MockServer| {
        HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(server.uri())
                .header("apikey", "anon-key")
                .max_retries(0)
                .build(),
        )
    };

    let state = AppState {
        origin: ORIGIN.to_string(),
        exchanger: Arc::new(HostedAuthClient::new(client(backend))),
        store: Arc::new(RestPartnerStore::new(client(backend))),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

/// HTTP client that does not follow redirects, so Location can be asserted
fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

fn mock_token_success(user_id: &str, metadata: serde_json::Value) -> Mock {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-abc",
            "expires_in": 3600,
            "user": { "id": user_id, "user_metadata": metadata }
        })))
}

fn assert_redirect(response: &reqwest::Response, expected_location: &str) {
    assert_eq!(response.status(), reqwest::StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"].to_str().unwrap(),
        expected_location
    );
}

#[tokio::test]
async fn test_partner_via_record_lookup() {
    let backend = MockServer::start().await;
    mock_token_success("user-1", json!({})).mount(&backend).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .and(query_param("user_id", "eq.user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "user-1"}])))
        .mount(&backend)
        .await;

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback?code=good-code"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/partner/dashboard");
}

#[tokio::test]
async fn test_partner_via_metadata_flag_despite_failing_lookup() {
    let backend = MockServer::start().await;
    mock_token_success("user-2", json!({ "is_partner": true }))
        .mount(&backend)
        .await;
    // Partner store is down; the flag must still win.
    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback?code=good-code"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/partner/dashboard");
}

#[tokio::test]
async fn test_regular_user_without_record() {
    let backend = MockServer::start().await;
    mock_token_success("user-3", json!({})).mount(&backend).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend)
        .await;

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback?code=good-code"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/dashboard");
}

#[tokio::test]
async fn test_regular_user_when_lookup_fails() {
    let backend = MockServer::start().await;
    mock_token_success("user-4", json!({})).mount(&backend).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backend)
        .await;

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback?code=good-code"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/dashboard");
}

#[tokio::test]
async fn test_missing_code_redirects_to_landing_page() {
    let backend = MockServer::start().await;
    // No mocks: the gateway must not call the backend at all.

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/");
}

#[tokio::test]
async fn test_invalid_code_redirects_to_landing_page() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&backend)
        .await;

    let gateway = start_gateway(&backend).await;
    let response = no_redirect_client()
        .get(format!("{gateway}/auth/callback?code=expired"))
        .send()
        .await
        .unwrap();

    assert_redirect(&response, "https://cardmatch.example/");
}

#[tokio::test]
async fn test_health_endpoint() {
    let backend = MockServer::start().await;
    let gateway = start_gateway(&backend).await;

    let response = reqwest::get(format!("{gateway}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
