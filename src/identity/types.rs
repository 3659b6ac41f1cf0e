//! Session types
//!
//! A session is ephemeral: created by the identity exchange, used to pick a
//! redirect destination, and dropped. Nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An authenticated session returned by the identity exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Identity of the authenticated user
    pub user_id: String,

    /// Opaque access token for the session
    pub access_token: String,

    /// When the access token expires, if the provider reported it
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Profile metadata attached to the identity
    #[serde(default)]
    pub metadata: ProfileMetadata,
}

impl Session {
    /// Whether the profile metadata carries `is_partner = true`
    pub fn is_partner_flagged(&self) -> bool {
        self.metadata.is_partner == Some(true)
    }
}

/// Profile metadata carried on the identity
///
/// The provider stores arbitrary JSON here; only `is_partner` matters to the
/// gateway, the rest is kept opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Partner flag, if present on the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_partner: Option<bool>,

    /// Everything else on the profile, untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
