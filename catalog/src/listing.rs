//! List-fetch-mutate state shared by the catalog, my-books, and
//! borrowed-books views.
//!
//! DESIGN
//! ======
//! Each view holds a transient copy of one backend collection. The copy is
//! only ever changed after the backend confirmed a write: either by
//! refetching the whole collection or by patching the single affected entry.
//! Failed requests leave the held items untouched; only the loading flag
//! moves.
//!
//! ```text
//! Loading --ok(non-empty)--> Ready
//! Loading --ok(empty)------> Empty
//! Loading --err------------> Failed (error notice raised)
//! ```
//!
//! `Loading` only covers the first read. A refetch keeps the settled phase
//! so held cards stay on screen; [`ListState::is_loading`] still reports it.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::book::{Book, MutationResponse};
use crate::error::ApiError;
use crate::notice::Notice;

/// Fallback for a failed collection read.
pub const FETCH_FAILED: &str = "Error fetching books";

/// Items addressable by a stable backend identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Book {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Rendering phase derived from [`ListState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Empty,
    Failed,
}

/// How a view resynchronizes after a confirmed write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resync {
    /// Re-issue the collection read.
    Refetch,
    /// Drop the mutated entry locally.
    Remove,
    /// Swap in the entry returned by the backend.
    Replace,
    /// The view holds no list.
    Nothing,
}

/// Write actions a view can take on a single book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Borrow,
    Return,
    Update,
    Delete,
}

impl Action {
    #[must_use]
    pub fn resync(self) -> Resync {
        match self {
            Self::Create => Resync::Nothing,
            Self::Borrow => Resync::Refetch,
            Self::Return | Self::Delete => Resync::Remove,
            Self::Update => Resync::Replace,
        }
    }

    /// Error text when the backend gave no message.
    #[must_use]
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Create => "Error adding book",
            Self::Borrow => "Error borrowing book",
            Self::Return => "Error returning book",
            Self::Update => "Error updating book",
            Self::Delete => "Error deleting book",
        }
    }

    /// Success text when the backend gave no message.
    #[must_use]
    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Create => "Book added",
            Self::Borrow => "Book borrowed",
            Self::Return => "Book returned",
            Self::Update => "Book updated",
            Self::Delete => "Book deleted",
        }
    }

    /// Notification for a settled write. Depends only on the response, so
    /// it is raised even when no view holds the list any more.
    #[must_use]
    pub fn notice(self, result: &Result<MutationResponse, ApiError>) -> Notice {
        match result {
            Ok(response) => Notice::success(response.message_or(self.success_fallback())),
            Err(err) => Notice::error(err.message_or(self.failure_fallback())),
        }
    }
}

/// What a view must do after settling a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub notice: Notice,
    /// The view should re-issue its collection read.
    pub refetch: bool,
}

/// Locally held copy of one backend collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    failed: bool,
    /// At least one read has completed.
    settled: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListState<T> {
    /// A view starts out loading its collection.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), loading: true, failed: false, settled: false }
    }

    /// Mark a (re)fetch in flight. Held items stay visible.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Settle a collection read. Returns the error notice on failure.
    pub fn finish_fetch(&mut self, result: Result<Vec<T>, ApiError>) -> Option<Notice> {
        self.loading = false;
        self.settled = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.failed = false;
                None
            }
            Err(err) => {
                self.failed = true;
                Some(Notice::error(err.message_or(FETCH_FAILED)))
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.settled {
            Phase::Loading
        } else if !self.items.is_empty() {
            Phase::Ready
        } else if self.failed {
            Phase::Failed
        } else {
            Phase::Empty
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// A read is in flight, including a refetch behind held items.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> ListState<T> {
    /// Drop the entry with `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        self.items.len() != before
    }

    /// Replace the entry sharing `item`'s key. Returns whether one matched.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|held| held.key() == item.key()) {
            Some(held) => {
                *held = item;
                true
            }
            None => false,
        }
    }
}

impl ListState<Book> {
    /// Apply the outcome of `action` on book `key` and report the follow-up.
    ///
    /// On failure nothing changes. On success the configured resync runs;
    /// an update whose response omits the book falls back to a refetch.
    pub fn settle(
        &mut self,
        action: Action,
        key: &str,
        result: Result<MutationResponse, ApiError>,
    ) -> Settled {
        let notice = action.notice(&result);
        let Ok(response) = result else {
            return Settled { notice, refetch: false };
        };

        let refetch = match action.resync() {
            Resync::Refetch => true,
            Resync::Remove => {
                self.remove(key);
                false
            }
            Resync::Replace => match response.data {
                Some(book) => !self.replace(book),
                None => true,
            },
            Resync::Nothing => false,
        };

        Settled { notice, refetch }
    }
}
