//! Cursor query parameters and the cursored request builder

use super::users::lookup_user_ids;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::User;
use crate::pagination::{Cursor, CursorResponse, Page, PageIterator};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest page the id listings accept
pub const DEFAULT_ID_PAGE_SIZE: u32 = 5000;

/// Largest page the user-object listings accept
pub const DEFAULT_USER_PAGE_SIZE: u32 = 200;

/// Paging controls shared by every cursored listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorQueryParameters {
    /// Items per request (`count`); the endpoint maximum when unset
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Resume from a cursor saved from an earlier listing
    #[serde(default)]
    pub start_cursor: Option<Cursor>,
    /// Stop once this many items were returned
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl CursorQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn start_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// A page size of zero would never make progress
    pub fn validate(&self) -> Result<()> {
        if self.page_size == Some(0) {
            return Err(Error::invalid_parameter(
                "page_size",
                "page size must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Iterator over a cursored GET listing.
///
/// Every fetch sends `base` plus `cursor` and `count`, and decodes the
/// `{ids|users, next_cursor, previous_cursor}` body into a [`Page`].
pub(crate) fn cursored<T>(
    http: Arc<HttpClient>,
    path: &'static str,
    base: RequestConfig,
    params: CursorQueryParameters,
    default_page_size: u32,
) -> Result<PageIterator<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    params.validate()?;
    let page_size = params.page_size.unwrap_or(default_page_size);

    let iterator = PageIterator::new(move |cursor: Cursor| {
        let http = Arc::clone(&http);
        let config = page_query(&base, cursor, page_size);

        async move {
            let response: CursorResponse<T> = http.get_json(path, config).await?;
            Ok(Page::from(response))
        }
    });

    Ok(positioned(iterator, params))
}

/// Iterator over a cursored id listing that yields user objects.
///
/// Each fetch requests one page of ids, then looks the ids up through
/// `users/lookup`. Users the lookup no longer returns are left out, so a
/// page can hold fewer users than it had ids.
pub(crate) fn hydrated_users(
    http: Arc<HttpClient>,
    path: &'static str,
    base: RequestConfig,
    params: CursorQueryParameters,
) -> Result<PageIterator<User>> {
    params.validate()?;
    let page_size = params.page_size.unwrap_or(DEFAULT_ID_PAGE_SIZE);

    let iterator = PageIterator::new(move |cursor: Cursor| {
        let http = Arc::clone(&http);
        let config = page_query(&base, cursor, page_size);

        async move {
            let response: CursorResponse<u64> = http.get_json(path, config).await?;
            let ids = Page::from(response);
            let users = lookup_user_ids(&http, &ids.items).await?;
            Ok(Page::new(users, ids.previous_cursor, ids.next_cursor))
        }
    });

    Ok(positioned(iterator, params))
}

fn page_query(base: &RequestConfig, cursor: Cursor, page_size: u32) -> RequestConfig {
    base.clone()
        .query("cursor", cursor.as_query_value())
        .query("count", page_size)
}

fn positioned<T: Send + 'static>(
    iterator: PageIterator<T>,
    params: CursorQueryParameters,
) -> PageIterator<T> {
    let iterator = match params.start_cursor {
        Some(cursor) => iterator.with_start_cursor(cursor),
        None => iterator,
    };
    iterator.with_max_items(params.max_items)
}
