//! Common types used throughout the social SDK
//!
//! Backoff strategy, rate-limit tracking mode and log level, shared by
//! the HTTP client, the config loader and the CLI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Rate Limit Tracking
// ============================================================================

/// How the client reacts to the per-endpoint quotas the API reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitTrackingMode {
    /// Ignore rate limit headers
    None,
    /// Record quotas from response headers but never wait
    TrackOnly,
    /// Record quotas and sleep until reset before calling an exhausted endpoint
    #[default]
    TrackAndAwait,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_rate_limit_tracking_mode_serde() {
        let mode: RateLimitTrackingMode = serde_json::from_str("\"track_only\"").unwrap();
        assert_eq!(mode, RateLimitTrackingMode::TrackOnly);

        let json = serde_json::to_string(&RateLimitTrackingMode::TrackAndAwait).unwrap();
        assert_eq!(json, "\"track_and_await\"");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::DEBUG, tracing::Level::from(LogLevel::Debug));
        assert_eq!(tracing::Level::WARN, tracing::Level::from(LogLevel::Warn));
    }
}
