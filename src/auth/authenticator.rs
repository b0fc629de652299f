//! Applies the configured authentication to outgoing requests

use super::types::{AuthConfig, CachedToken, SignableRequest};
use crate::error::{Error, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Adds credentials to each request built by the HTTP client
pub struct Authenticator {
    config: AuthConfig,
    app_token: RwLock<Option<CachedToken>>,
    http_client: Client,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use `http_client` for token exchanges
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            app_token: RwLock::new(None),
            http_client,
        }
    }

    /// Authenticate `req`.
    ///
    /// `request` must describe the same call: a signer cannot look inside a
    /// `RequestBuilder`.
    pub async fn apply(
        &self,
        req: RequestBuilder,
        request: &SignableRequest<'_>,
    ) -> Result<RequestBuilder> {
        let req = match &self.config {
            AuthConfig::None => req,
            AuthConfig::Bearer { token } => req.bearer_auth(token),
            AuthConfig::Oauth2ClientCredentials { .. } => req.bearer_auth(self.app_token().await?),
            AuthConfig::Signed(signer) => {
                req.header(AUTHORIZATION, signer.authorization(request).await?)
            }
            AuthConfig::CustomHeaders { headers } => headers
                .iter()
                .fold(req, |req, (key, value)| req.header(key.as_str(), value.as_str())),
        };
        Ok(req)
    }

    /// App-only token, exchanged on first use and whenever it expired
    async fn app_token(&self) -> Result<String> {
        if let Some(token) = live_token(&*self.app_token.read().await) {
            return Ok(token);
        }

        let mut slot = self.app_token.write().await;
        // Another request may have finished the exchange while this one waited
        if let Some(token) = live_token(&slot) {
            return Ok(token);
        }

        let fresh = self.exchange_credentials().await?;
        let token = fresh.token.clone();
        *slot = Some(fresh);
        Ok(token)
    }

    /// Trade the consumer key and secret for an app-only bearer token
    async fn exchange_credentials(&self) -> Result<CachedToken> {
        let AuthConfig::Oauth2ClientCredentials {
            token_url,
            consumer_key,
            consumer_secret,
        } = &self.config
        else {
            return Err(Error::auth("no consumer credentials configured"));
        };

        debug!(token_url, "Exchanging consumer credentials for an app-only token");
        let response = self
            .http_client
            .post(token_url)
            .basic_auth(consumer_key, Some(consumer_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "token exchange rejected with status {}: {body}",
                status.as_u16()
            )));
        }

        let grant: TokenGrant = response.json().await?;
        if !grant.token_type.eq_ignore_ascii_case("bearer") {
            return Err(Error::auth(format!(
                "expected a bearer token, got token type '{}'",
                grant.token_type
            )));
        }

        info!("Obtained app-only bearer token");
        Ok(grant.into())
    }

    /// Forget the app-only token so the next request exchanges again
    pub async fn invalidate_token(&self) {
        self.app_token.write().await.take();
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

fn live_token(slot: &Option<CachedToken>) -> Option<String> {
    slot.as_ref()
        .filter(|token| !token.is_expired())
        .map(|token| token.token.clone())
}

/// Body of a successful `oauth2/token` call
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    #[serde(default = "bearer_type")]
    token_type: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

fn bearer_type() -> String {
    "bearer".to_string()
}

impl From<TokenGrant> for CachedToken {
    fn from(grant: TokenGrant) -> Self {
        match grant.expires_in {
            Some(secs) => CachedToken::expires_in(grant.access_token, secs),
            None => CachedToken::new(grant.access_token, None),
        }
    }
}
