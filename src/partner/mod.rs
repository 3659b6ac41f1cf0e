//! Partner record lookup
//!
//! Partner status lives in a table on the hosted backend, keyed by user id;
//! existence of a row implies partner status. The lookup is read-only and
//! exposed as a trait so the resolver can be tested with in-memory stubs.

mod store;

pub use store::{PartnerStore, RestPartnerStore};

#[cfg(test)]
mod tests;
