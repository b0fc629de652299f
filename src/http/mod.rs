//! HTTP client module
//!
//! Provides the request executor the API clients are built on.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Quota Tracking**: Per-endpoint `x-rate-limit-*` headers, optionally awaited
//! - **Authentication**: Integration with auth module

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{EndpointRateLimit, RateLimitTracker, RateLimiter, RateLimiterConfig};
