//! Outbound HTTP client module
//!
//! All backend calls go through this client, which provides:
//!
//! - **Bounded Timeouts**: every request carries a deadline
//! - **Automatic Retries**: configurable retry logic with backoff
//! - **Rate Limiting**: token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{BackoffType, HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
