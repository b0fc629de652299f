//! Auth configuration types
//!
//! Describes how requests are authenticated. Signing schemes (OAuth 1.0a
//! user context) are not implemented here; they plug in through
//! [`RequestSigner`].

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The parts of a request a signer needs to compute a signature
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP method
    pub method: &'a Method,
    /// Absolute URL without query string
    pub url: &'a str,
    /// Query and form parameters, in request order
    pub params: &'a [(String, String)],
}

/// External request signer
///
/// Implementations return the full value of the `Authorization` header for
/// a request, for example an `OAuth oauth_consumer_key="..", ...` string.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    /// Compute the `Authorization` header value for `request`
    async fn authorization(&self, request: &SignableRequest<'_>) -> Result<String>;
}

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Pre-issued app-only bearer token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// App-only bearer token obtained with the consumer key and secret
    Oauth2ClientCredentials {
        /// Token endpoint URL
        token_url: String,
        /// Consumer (API) key
        consumer_key: String,
        /// Consumer (API) secret
        consumer_secret: String,
    },

    /// User-context requests signed by an external signer
    Signed(Arc<dyn RequestSigner>),

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Bearer token auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Auth delegated to a signer
    pub fn signed(signer: impl RequestSigner + 'static) -> Self {
        Self::Signed(Arc::new(signer))
    }

    /// Check if requests go out unauthenticated
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::Oauth2ClientCredentials {
                token_url,
                consumer_key,
                ..
            } => f
                .debug_struct("Oauth2ClientCredentials")
                .field("token_url", token_url)
                .field("consumer_key", consumer_key)
                .field("consumer_secret", &"***")
                .finish(),
            Self::Signed(_) => write!(f, "Signed(..)"),
            Self::CustomHeaders { headers } => f
                .debug_struct("CustomHeaders")
                .field("headers", &headers.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}
