//! Tests for the partner store

use super::*;
use crate::http::{HttpClient, HttpClientConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> RestPartnerStore {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .header("apikey", "anon-key")
        .max_retries(0)
        .build();
    RestPartnerStore::new(HttpClient::with_config(config))
}

#[tokio::test]
async fn test_partner_record_exists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .and(query_param("user_id", "eq.user-1"))
        .and(query_param("select", "user_id"))
        .and(query_param("limit", "1"))
        .and(header("apikey", "anon-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"user_id": "user-1"}])),
        )
        .mount(&server)
        .await;

    assert!(store_for(&server).partner_exists("user-1").await.unwrap());
}

#[tokio::test]
async fn test_partner_record_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    assert!(!store_for(&server).partner_exists("user-2").await.unwrap());
}

#[tokio::test]
async fn test_partner_lookup_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/partners"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let err = store_for(&server).partner_exists("user-3").await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Lookup { .. }));
}
