//! Identity exchange
//!
//! Converts a one-time authorization code into an authenticated session by
//! calling the hosted identity provider. The exchange is exposed as a trait
//! so the callback handler and resolver can be tested against in-memory
//! doubles.

mod exchanger;
mod types;

pub use exchanger::{HostedAuthClient, IdentityExchanger};
pub use types::{ProfileMetadata, Session};
