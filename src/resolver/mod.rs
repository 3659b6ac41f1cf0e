//! Partner-routing resolver
//!
//! Decides where an auth callback should land. The decision table is small
//! and deliberately exact:
//!
//! 1. Profile metadata carries `is_partner = true` → partner dashboard.
//! 2. Otherwise a partner record exists for the user → partner dashboard.
//! 3. Otherwise → regular dashboard.
//! 4. No session at all → landing page.
//!
//! The metadata flag is checked first and short-circuits the lookup, so a
//! failing lookup can never override it. A lookup error is treated the same
//! as "no record": under backend uncertainty the user routes as a regular
//! user rather than seeing an error page.

use crate::identity::Session;
use crate::partner::PartnerStore;
use tracing::warn;


/// Where a resolved callback redirects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Partner dashboard
    PartnerHome,
    /// Regular user dashboard
    UserHome,
    /// Landing page, used when no session could be established
    FallbackHome,
}

impl Destination {
    /// Relative path for this destination
    pub fn path(self) -> &'static str {
        match self {
            Destination::PartnerHome => "/partner/dashboard",
            Destination::UserHome => "/dashboard",
            Destination::FallbackHome => "/",
        }
    }

    /// Absolute redirect URL against the given origin
    pub fn redirect_url(self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

/// Resolve a destination for an optional session.
///
/// Pure in (session, lookup outcome); the only side effect is the lookup
/// call itself. Exactly one destination comes out, and the absence of a
/// session always yields [`Destination::FallbackHome`].
pub async fn resolve(session: Option<&Session>, store: &dyn PartnerStore) -> Destination {
    let Some(session) = session else {
        return Destination::FallbackHome;
    };

    // Metadata wins and skips the lookup entirely.
    if session.is_partner_flagged() {
        return Destination::PartnerHome;
    }

    match store.partner_exists(&session.user_id).await {
        Ok(true) => Destination::PartnerHome,
        Ok(false) => Destination::UserHome,
        Err(error) => {
            // Lookup failure routes as a regular user, never as an error.
            warn!(user_id = %session.user_id, %error, "partner lookup failed, routing as regular user");
            Destination::UserHome
        }
    }
}
