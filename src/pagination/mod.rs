//! Pagination module
//!
//! Cursor-based pagination for list endpoints (friend ids, follower ids,
//! blocked users, pending follow requests, ...).
//!
//! # Overview
//!
//! A [`PageIterator`] hides the cursor bookkeeping of a listing behind a
//! pull-based `has_next` / `next_page` interface. It is handed a fetch
//! function that turns a [`Cursor`] into a [`Page`]; the iterator decides
//! when to stop (terminal cursor or item cap), the fetch function decides
//! how to talk to the server.

mod iterator;
mod types;

pub use iterator::{IteratorState, PageFuture, PageIterator};
pub use types::{Cursor, CursorResponse, Page};
