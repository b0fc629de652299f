//! Pagination types
//!
//! Cursor tokens, fetched pages, and the wire shape of cursored responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque position within a cursor-paginated listing
///
/// The server hands out cursors; the client only stores them and sends
/// them back. Two values are reserved:
/// - `0` is the initial page when used as a starting point
/// - `-1` means there are no further pages
///
/// A *next* cursor of `0` also means the listing is finished, since the
/// API reports the end of a listing that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    /// Start of a listing
    pub const INITIAL: Cursor = Cursor(0);

    /// No further pages
    pub const END: Cursor = Cursor(-1);

    /// Wrap a raw cursor value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw cursor value
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Check if this is the initial-page sentinel
    pub const fn is_initial(self) -> bool {
        self.0 == Self::INITIAL.0
    }

    /// Check if this is the no-more-pages sentinel
    pub const fn is_end(self) -> bool {
        self.0 == Self::END.0
    }

    /// Check if this cursor, received as a page's next cursor, ends the listing
    pub const fn is_terminal(self) -> bool {
        self.is_end() || self.is_initial()
    }

    /// Value to put in the `cursor` query parameter.
    ///
    /// The API asks for `-1` to get the first page.
    pub const fn as_query_value(self) -> i64 {
        if self.is_initial() {
            Self::END.0
        } else {
            self.0
        }
    }
}

impl From<i64> for Cursor {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cursor> for i64 {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fetched batch of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Cursor that fetches the page before this one
    pub previous_cursor: Cursor,
    /// Cursor that fetches the page after this one
    pub next_cursor: Cursor,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, previous_cursor: Cursor, next_cursor: Cursor) -> Self {
        Self {
            items,
            previous_cursor,
            next_cursor,
        }
    }

    /// Create the last page of a listing
    pub fn last(items: Vec<T>, previous_cursor: Cursor) -> Self {
        Self::new(items, previous_cursor, Cursor::END)
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the server reported more pages after this one
    pub fn has_more(&self) -> bool {
        !self.next_cursor.is_terminal()
    }

    /// Take the items, dropping the cursors
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Convert the items, keeping the cursors
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            previous_cursor: self.previous_cursor,
            next_cursor: self.next_cursor,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Wire shape of a cursored listing response
///
/// Id listings put their items under `ids`, user listings under `users`.
/// A missing `next_cursor` decodes as `0`, which ends the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CursorResponse<T> {
    /// Items of this page
    #[serde(alias = "ids", alias = "users", default = "Vec::new")]
    pub items: Vec<T>,
    /// Cursor of the following page
    #[serde(default)]
    pub next_cursor: Cursor,
    /// Cursor of the preceding page
    #[serde(default)]
    pub previous_cursor: Cursor,
}

impl<T> From<CursorResponse<T>> for Page<T> {
    fn from(response: CursorResponse<T>) -> Self {
        Page::new(
            response.items,
            response.previous_cursor,
            response.next_cursor,
        )
    }
}
