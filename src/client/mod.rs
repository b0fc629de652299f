//! API client
//!
//! [`Client`] owns one [`HttpClient`] and hands out cheap per-area
//! sub-clients that share it:
//! - [`UsersClient`]: lookups, friends/followers, blocks, follow actions
//! - [`AccountClient`]: follow requests, mutes, settings
//! - [`FriendshipsClient`]: relationships between users
//!
//! Listings come back as [`PageIterator`](crate::pagination::PageIterator)s
//! and issue no request until their first `next_page`.

mod account;
mod friendships;
mod params;
mod users;

pub use account::AccountClient;
pub use friendships::{FriendshipsClient, MAX_LOOKUP_RELATIONSHIPS};
pub use params::{CursorQueryParameters, DEFAULT_ID_PAGE_SIZE, DEFAULT_USER_PAGE_SIZE};
pub use users::{UsersClient, MAX_LOOKUP_USERS};

use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use std::sync::Arc;
use tracing::info;

#[cfg(test)]
mod tests;

/// Entry point to the API
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Build a client with the credentials found in `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let auth = config.auth_config()?;
        Self::with_auth(config, auth)
    }

    /// Build a client with explicit authentication, e.g. an external signer
    pub fn with_auth(config: &ClientConfig, auth: AuthConfig) -> Result<Self> {
        config.validate()?;
        info!(base_url = %config.base_url, auth = ?auth, "Creating API client");
        let http = HttpClient::with_auth(config.to_http_config(), auth)?;
        Ok(Self::with_http(Arc::new(http)))
    }

    /// Wrap an already configured HTTP client
    pub fn with_http(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Shared HTTP client
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(Arc::clone(&self.http))
    }

    pub fn account(&self) -> AccountClient {
        AccountClient::new(Arc::clone(&self.http))
    }

    pub fn friendships(&self) -> FriendshipsClient {
        FriendshipsClient::new(Arc::clone(&self.http))
    }
}
