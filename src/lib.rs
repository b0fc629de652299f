// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Social SDK
//!
//! A typed, async client for a social network's REST API: users, the
//! follow graph, blocks, mutes and relationships.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Every listing is a lazy [`PageIterator`] that
//!   issues one request per page and can be resumed from a saved cursor
//! - **Auth**: App-only bearer tokens, client-credentials exchange, or an
//!   external request signer for user context
//! - **Rate Limits**: Client-side token bucket plus per-endpoint quota
//!   tracking from `x-rate-limit-*` headers
//! - **Retries**: Backoff on 5xx, timeouts and 429s
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use social_sdk::{Client, ClientConfig, CursorQueryParameters, UserRef};
//!
//! #[tokio::main]
//! async fn main() -> social_sdk::Result<()> {
//!     let config = ClientConfig::load("client.yaml")?;
//!     let client = Client::new(&config)?;
//!
//!     let mut ids = client
//!         .users()
//!         .get_follower_ids_of(UserRef::screen_name("rustlang"), CursorQueryParameters::new())?;
//!
//!     while ids.has_next() {
//!         let page = ids.next_page().await?;
//!         println!("{} followers, next cursor {}", page.len(), page.next_cursor);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                           Client                            │
//! │     users()          account()          friendships()       │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────────┬────────────────┐
//! │  Pagination  │            HTTP             │      Auth      │
//! ├──────────────┼─────────────────────────────┼────────────────┤
//! │ PageIterator │ Retry / Backoff             │ Bearer         │
//! │ Cursor       │ Token bucket                │ Client creds   │
//! │ Page         │ Endpoint quota tracking     │ Signer         │
//! └──────────────┴─────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// API objects
pub mod models;

/// API client and endpoint groups
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{AuthConfig, RequestSigner, SignableRequest};
pub use client::{AccountClient, Client, CursorQueryParameters, FriendshipsClient, UsersClient};
pub use config::ClientConfig;
pub use models::{User, UserRef};
pub use pagination::{Cursor, Page, PageIterator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
