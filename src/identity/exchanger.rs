//! Identity exchanger implementations

use super::types::{ProfileMetadata, Session};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Converts an authorization code into an authenticated session
#[async_trait]
pub trait IdentityExchanger: Send + Sync {
    /// Exchange a one-time authorization code for a session.
    ///
    /// Any failure (invalid code, network error, timeout, malformed
    /// response) is an error; callers treat that as "no session".
    async fn exchange(&self, code: &str) -> Result<Session>;
}

/// Identity exchanger backed by the hosted auth service
pub struct HostedAuthClient {
    http: HttpClient,
}

/// Token endpoint response shape
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: Option<AuthUser>,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    user_metadata: ProfileMetadata,
}

impl HostedAuthClient {
    /// Create a client on top of a configured HTTP client.
    ///
    /// The HTTP client is expected to carry the backend base URL and the
    /// `apikey` default header.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Probe the auth service health endpoint
    pub async fn health(&self) -> Result<()> {
        self.http.get("/auth/v1/health").await?;
        Ok(())
    }
}

#[async_trait]
impl IdentityExchanger for HostedAuthClient {
    async fn exchange(&self, code: &str) -> Result<Session> {
        if code.trim().is_empty() {
            return Err(Error::exchange("empty authorization code"));
        }

        let request = RequestConfig::new()
            .query("grant_type", "authorization_code")
            .json(json!({ "auth_code": code }));

        let response: TokenResponse = self
            .http
            .post_json("/auth/v1/token", request)
            .await
            .map_err(|e| Error::exchange(e.to_string()))?;

        let Some(user) = response.user else {
            return Err(Error::exchange("token response carried no user"));
        };

        debug!(user_id = %user.id, "authorization code exchanged");

        Ok(Session {
            user_id: user.id,
            access_token: response.access_token,
            expires_at: response
                .expires_in
                .map(|secs| Utc::now() + ChronoDuration::seconds(secs)),
            metadata: user.user_metadata,
        })
    }
}
