//! Rate limiting
//!
//! Two layers:
//! - [`RateLimiter`]: client-side token bucket (governor) that spaces out
//!   requests regardless of endpoint.
//! - [`RateLimitTracker`]: per-endpoint quotas reported by the server in
//!   `x-rate-limit-*` headers, optionally awaited before the next call.

use crate::types::RateLimitTrackingMode;
use chrono::{DateTime, TimeZone, Utc};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

// ============================================================================
// Token Bucket
// ============================================================================

/// Configuration for rate limiting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Maximum number of requests per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 10,
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter; zero values are raised to one
    pub fn new(config: &RateLimiterConfig) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}

// ============================================================================
// Server-Reported Quotas
// ============================================================================

/// Quota of one endpoint as last reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRateLimit {
    /// Requests allowed per window
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// When the window resets
    pub reset_at: DateTime<Utc>,
}

impl EndpointRateLimit {
    /// Read `x-rate-limit-limit`, `x-rate-limit-remaining` and `x-rate-limit-reset`.
    ///
    /// Returns `None` unless all three are present and numeric.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_number(headers, "x-rate-limit-limit")?;
        let remaining = header_number(headers, "x-rate-limit-remaining")?;
        let reset: i64 = header_number(headers, "x-rate-limit-reset")?;
        let reset_at = Utc.timestamp_opt(reset, 0).single()?;

        Some(Self {
            limit,
            remaining,
            reset_at,
        })
    }

    /// No requests left and the window has not reset yet
    pub fn is_exhausted(&self, now: DateTime<Utc>) -> bool {
        self.remaining == 0 && now < self.reset_at
    }

    /// Time left until the window resets, zero if it already has
    pub fn time_until_reset(&self, now: DateTime<Utc>) -> Duration {
        (self.reset_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

/// Tracks per-endpoint quotas and waits out exhausted windows
#[derive(Debug, Clone, Default)]
pub struct RateLimitTracker {
    mode: RateLimitTrackingMode,
    limits: Arc<RwLock<HashMap<String, EndpointRateLimit>>>,
}

impl RateLimitTracker {
    /// Create a tracker in the given mode
    pub fn new(mode: RateLimitTrackingMode) -> Self {
        Self {
            mode,
            limits: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Tracking mode
    pub fn mode(&self) -> RateLimitTrackingMode {
        self.mode
    }

    /// Sleep until `endpoint`'s window resets if its quota is used up.
    ///
    /// Only waits in [`RateLimitTrackingMode::TrackAndAwait`].
    pub async fn wait_for(&self, endpoint: &str) {
        if self.mode != RateLimitTrackingMode::TrackAndAwait {
            return;
        }

        let delay = {
            let limits = self.limits.read().await;
            let now = Utc::now();
            match limits.get(endpoint) {
                Some(limit) if limit.is_exhausted(now) => limit.time_until_reset(now),
                _ => return,
            }
        };

        info!(endpoint, ?delay, "Rate limit exhausted, waiting for reset");
        tokio::time::sleep(delay).await;
    }

    /// Record the quota reported in a response
    pub async fn record(&self, endpoint: &str, headers: &HeaderMap) {
        if self.mode == RateLimitTrackingMode::None {
            return;
        }
        if let Some(limit) = EndpointRateLimit::from_headers(headers) {
            self.update(endpoint, limit).await;
        }
    }

    /// Store a quota for `endpoint`
    pub async fn update(&self, endpoint: &str, limit: EndpointRateLimit) {
        debug!(
            endpoint,
            remaining = limit.remaining,
            limit = limit.limit,
            reset_at = %limit.reset_at,
            "Rate limit updated"
        );
        self.limits.write().await.insert(endpoint.to_string(), limit);
    }

    /// Last known quota of `endpoint`
    pub async fn get(&self, endpoint: &str) -> Option<EndpointRateLimit> {
        self.limits.read().await.get(endpoint).copied()
    }
}
