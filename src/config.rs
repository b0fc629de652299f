//! Client configuration
//!
//! [`ClientConfig`] is read from a YAML or JSON file. String values of the
//! form `${NAME}` are replaced with the environment variable `NAME`, so
//! secrets can stay out of the file:
//!
//! ```yaml
//! base_url: https://api.example.com/1.1
//! timeout_secs: 30
//! max_retries: 3
//! backoff:
//!   type: exponential
//!   initial_ms: 100
//!   max_ms: 60000
//! requests_per_second: 10
//! burst_size: 10
//! rate_limit_tracking: track_and_await
//! credentials:
//!   bearer_token: ${SOCIAL_BEARER_TOKEN}
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, RateLimitTrackingMode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Matches `${ENV_VAR}` placeholders
static ENV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env placeholder pattern is valid")
});

/// Path of the app-only token endpoint, relative to the API host
const TOKEN_PATH: &str = "/oauth2/token";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://api.example.com/1.1`
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries per request on 5xx, timeouts and 429s
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retries
    #[serde(default)]
    pub backoff: BackoffConfig,

    /// Client-side token bucket rate; `0` disables it
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,

    /// Token bucket burst size
    #[serde(default = "default_burst")]
    pub burst_size: u32,

    /// How server-reported endpoint quotas are handled
    #[serde(default)]
    pub rate_limit_tracking: RateLimitTrackingMode,

    /// API credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rps() -> u32 {
    10
}

fn default_burst() -> u32 {
    10
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}

/// API credentials
///
/// A bearer token wins over a consumer key pair. Without either, requests
/// go out unauthenticated. User-context signing is configured in code
/// through [`AuthConfig::Signed`].
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Pre-issued app-only bearer token
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Consumer key, exchanged for an app-only token
    #[serde(default)]
    pub consumer_key: Option<String>,

    /// Consumer secret
    #[serde(default)]
    pub consumer_secret: Option<String>,

    /// Token endpoint; defaults to `/oauth2/token` on the API host
    #[serde(default)]
    pub token_url: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &self.consumer_secret.as_ref().map(|_| "***"))
            .field("token_url", &self.token_url)
            .finish()
    }
}

// ============================================================================
// Loading
// ============================================================================

impl ClientConfig {
    /// Config with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffConfig::default(),
            requests_per_second: default_rps(),
            burst_size: default_burst(),
            rate_limit_tracking: RateLimitTrackingMode::default(),
            credentials: CredentialsConfig::default(),
        }
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.resolved()
    }

    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.resolved()
    }

    /// Substitute environment placeholders and validate
    fn resolved(mut self) -> Result<Self> {
        self.base_url = resolve_env("base_url", &self.base_url)?;

        let credentials = &mut self.credentials;
        for (field, value) in [
            ("credentials.bearer_token", &mut credentials.bearer_token),
            ("credentials.consumer_key", &mut credentials.consumer_key),
            ("credentials.consumer_secret", &mut credentials.consumer_secret),
            ("credentials.token_url", &mut credentials.token_url),
        ] {
            if let Some(raw) = value.as_deref() {
                *value = Some(resolve_env(field, raw)?);
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Check the values a client cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url).map_err(|e| Error::InvalidConfigValue {
            field: "base_url".to_string(),
            message: e.to_string(),
        })?;
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfigValue {
                field: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Settings for the underlying [`HttpClient`](crate::http::HttpClient)
    pub fn to_http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff.backoff_type,
                Duration::from_millis(self.backoff.initial_ms),
                Duration::from_millis(self.backoff.max_ms),
            )
            .rate_limit_tracking(self.rate_limit_tracking);

        let builder = if self.requests_per_second == 0 {
            builder.no_rate_limit()
        } else {
            builder.rate_limit(RateLimiterConfig::new(
                self.requests_per_second,
                self.burst_size,
            ))
        };
        builder.build()
    }

    /// Authentication described by [`credentials`](Self::credentials)
    pub fn auth_config(&self) -> Result<AuthConfig> {
        let credentials = &self.credentials;

        if let Some(token) = non_empty(&credentials.bearer_token) {
            return Ok(AuthConfig::bearer(token));
        }

        match (
            non_empty(&credentials.consumer_key),
            non_empty(&credentials.consumer_secret),
        ) {
            (Some(key), Some(secret)) => Ok(AuthConfig::Oauth2ClientCredentials {
                token_url: self.token_url()?,
                consumer_key: key.to_string(),
                consumer_secret: secret.to_string(),
            }),
            (Some(_), None) => Err(Error::missing_field("credentials.consumer_secret")),
            (None, Some(_)) => Err(Error::missing_field("credentials.consumer_key")),
            (None, None) => Ok(AuthConfig::None),
        }
    }

    fn token_url(&self) -> Result<String> {
        if let Some(url) = non_empty(&self.credentials.token_url) {
            return Ok(url.to_string());
        }
        let base = url::Url::parse(&self.base_url)?;
        Ok(base.join(TOKEN_PATH)?.to_string())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Replace every `${NAME}` in `value` with the environment variable `NAME`
pub fn resolve_env(field: &str, value: &str) -> Result<String> {
    let mut missing = None;
    let resolved = ENV_REGEX.replace_all(value, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        std::env::var(name).unwrap_or_else(|_| {
            missing.get_or_insert_with(|| name.to_string());
            String::new()
        })
    });

    match missing {
        Some(name) => Err(Error::InvalidConfigValue {
            field: field.to_string(),
            message: format!("environment variable '{name}' is not set"),
        }),
        None => Ok(resolved.into_owned()),
    }
}
