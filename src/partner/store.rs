//! Partner store implementations

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Read-only lookup of partner records by user id
#[async_trait]
pub trait PartnerStore: Send + Sync {
    /// Whether a partner record exists for the given user.
    ///
    /// Errors are propagated; the resolver decides what a failed lookup
    /// means (it treats it as "no record").
    async fn partner_exists(&self, user_id: &str) -> Result<bool>;
}

/// Partner store backed by the hosted backend's REST interface
pub struct RestPartnerStore {
    http: HttpClient,
}

/// Row shape returned by the partners table (only the key is selected)
#[derive(Debug, Deserialize)]
struct PartnerRow {
    #[allow(dead_code)]
    user_id: String,
}

impl RestPartnerStore {
    /// Create a store on top of a configured HTTP client.
    ///
    /// The HTTP client is expected to carry the backend base URL and the
    /// `apikey` default header.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PartnerStore for RestPartnerStore {
    async fn partner_exists(&self, user_id: &str) -> Result<bool> {
        let request = RequestConfig::new()
            .query("user_id", format!("eq.{user_id}"))
            .query("select", "user_id")
            .query("limit", "1");

        let rows: Vec<PartnerRow> = self
            .http
            .get_json("/rest/v1/partners", request)
            .await
            .map_err(|e| Error::lookup(e.to_string()))?;

        let exists = !rows.is_empty();
        debug!(user_id, exists, "partner record lookup");
        Ok(exists)
    }
}
