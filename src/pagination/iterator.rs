//! Cursor page iterator
//!
//! Walks a cursor-paginated listing one request at a time. The iterator
//! owns the cursor bookkeeping; the fetch function owns the request.

use super::types::{Cursor, Page};
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::{FutureExt, Stream};
use std::fmt;
use std::future::Future;
use tracing::debug;

/// Future returned by a boxed page fetch
pub type PageFuture<T> = BoxFuture<'static, Result<Page<T>>>;

type FetchFn<T> = Box<dyn FnMut(Cursor) -> PageFuture<T> + Send>;

/// Cursor bookkeeping of a [`PageIterator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IteratorState {
    /// Cursor the next fetch will be issued with
    pub cursor: Cursor,
    /// Set once the listing ended or the item cap was reached
    pub completed: bool,
    /// Items returned so far
    pub items_fetched: usize,
    /// Pages returned so far
    pub pages_fetched: usize,
}

impl IteratorState {
    /// Fresh state positioned at `cursor`
    pub fn starting_at(cursor: Cursor) -> Self {
        Self {
            cursor,
            completed: false,
            items_fetched: 0,
            pages_fetched: 0,
        }
    }

    /// Record a page that is about to be handed to the caller
    fn advance(&mut self, next_cursor: Cursor, items: usize, max_items: Option<usize>) {
        self.cursor = next_cursor;
        self.items_fetched += items;
        self.pages_fetched += 1;

        if next_cursor.is_terminal() || max_items.is_some_and(|max| self.items_fetched >= max) {
            self.completed = true;
        }
    }
}

/// Lazy, forward-only sequence of pages over a cursored listing
///
/// Each [`next_page`](Self::next_page) call performs exactly one fetch with
/// the stored cursor and moves to the cursor the server returned. A failed
/// fetch leaves the cursor where it was, so calling `next_page` again
/// retries the same page. The iterator never retries on its own.
///
/// ```rust,ignore
/// let mut ids = client.users().get_friend_ids(UserRef::screen_name("rustlang"), params)?;
/// while ids.has_next() {
///     let page = ids.next_page().await?;
///     println!("{} ids", page.len());
/// }
/// ```
pub struct PageIterator<T> {
    fetch: FetchFn<T>,
    state: IteratorState,
    max_items: Option<usize>,
}

impl<T: Send + 'static> PageIterator<T> {
    /// Create an iterator that starts at the initial page
    pub fn new<F, Fut>(mut fetch: F) -> Self
    where
        F: FnMut(Cursor) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch: Box::new(move |cursor| fetch(cursor).boxed()),
            state: IteratorState::starting_at(Cursor::INITIAL),
            max_items: None,
        }
    }

    /// Start from a cursor saved from an earlier listing
    #[must_use]
    pub fn with_start_cursor(mut self, cursor: Cursor) -> Self {
        self.state.cursor = cursor;
        self
    }

    /// Stop once at least `max_items` items have been returned
    #[must_use]
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.max_items = max_items;
        self
    }

    /// Check if another page can be requested
    pub fn has_next(&self) -> bool {
        !self.state.completed && !self.state.cursor.is_end() && !self.cap_reached()
    }

    /// Fetch the page at the stored cursor
    pub async fn next_page(&mut self) -> Result<Page<T>> {
        if !self.has_next() {
            return Err(Error::IteratorExhausted);
        }

        let cursor = self.state.cursor;
        debug!(cursor = %cursor, "Fetching page");

        let page = (self.fetch)(cursor).await?;

        if !page.next_cursor.is_terminal() && page.next_cursor == cursor {
            return Err(Error::CursorNotAdvanced {
                cursor: cursor.value(),
            });
        }

        self.state.advance(page.next_cursor, page.len(), self.max_items);

        debug!(
            items = page.len(),
            next_cursor = %page.next_cursor,
            total = self.state.items_fetched,
            completed = self.state.completed,
            "Page fetched"
        );

        Ok(page)
    }

    /// Fetch every remaining page and flatten the items.
    ///
    /// With a cap set, the result is truncated to the cap even when the last
    /// page carried more.
    pub async fn collect_items(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while self.has_next() {
            let page = self.next_page().await?;
            items.extend(page.into_items());
        }

        if let Some(max) = self.max_items {
            items.truncate(max);
        }
        Ok(items)
    }

    /// Turn the iterator into a stream of pages.
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>>> + Send {
        futures::stream::try_unfold(self, |mut iter| async move {
            if !iter.has_next() {
                return Ok(None);
            }
            let page = iter.next_page().await?;
            Ok(Some((page, iter)))
        })
    }

    /// Cursor the next fetch will use
    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    /// Current bookkeeping
    pub fn state(&self) -> IteratorState {
        self.state
    }

    /// Item cap, if any
    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    fn cap_reached(&self) -> bool {
        self.max_items.is_some_and(|max| self.state.items_fetched >= max)
    }
}

impl<T> fmt::Debug for PageIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("state", &self.state)
            .field("max_items", &self.max_items)
            .finish_non_exhaustive()
    }
}
