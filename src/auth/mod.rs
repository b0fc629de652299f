//! Authentication module
//!
//! Supports: app-only Bearer tokens (pre-issued or fetched with client
//! credentials), externally signed user-context requests, custom headers.
//!
//! The `Authenticator` applies the configured scheme to each request and
//! caches app-only tokens between requests.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, RequestSigner, SignableRequest};
