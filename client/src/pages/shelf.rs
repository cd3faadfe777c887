//! Fetch and mutate plumbing shared by the list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page holds a `ListState<Book>` signal. `fetch` (re)loads it
//! from one collection endpoint; `mutate` runs one write, settles it into
//! the list, raises the notification, and refetches when the action's
//! resync policy asks for it. Requests are never cancelled: a late
//! response after the page unmounted still raises its notification, and
//! only the list patch and refetch are skipped.

#[cfg(test)]
#[path = "shelf_test.rs"]
mod shelf_test;

use catalog::book::MutationResponse;
use catalog::endpoints::BookScope;
use catalog::{Action, ApiError, Book, ListState, Notice, Phase};
use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::state::session::SessionState;
use crate::state::toasts::{ToastState, VIEW_TOAST_MS};

/// Where a failed collection read is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FetchReport {
    /// Raise an error toast.
    Toast,
    /// Log to the browser console only.
    Log,
}

/// Signals a list page hands to the shared helpers.
#[derive(Clone, Copy)]
pub(crate) struct Shelf {
    pub session: RwSignal<SessionState>,
    pub toasts: RwSignal<ToastState>,
    pub books: RwSignal<ListState<Book>>,
    pub scope: BookScope,
    pub report: FetchReport,
}

impl Shelf {
    /// Bind to the context signals with a fresh, loading list.
    pub fn new(scope: BookScope, report: FetchReport) -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
            books: RwSignal::new(ListState::new()),
            scope,
            report,
        }
    }

    /// (Re)load the collection.
    pub fn fetch(self) {
        self.books.update(ListState::begin_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match self.session.get_untracked().require_token() {
                Ok(token) => crate::net::api::fetch_books(&token, self.scope).await,
                Err(err) => Err(err),
            };
            let notice = self.books.try_update(|s| s.finish_fetch(result)).flatten();
            if let Some(notice) = notice {
                self.report_fetch_failure(notice);
            }
        });
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn report_fetch_failure(self, notice: Notice) {
        match self.report {
            FetchReport::Toast => notify(self.toasts, notice, VIEW_TOAST_MS),
            FetchReport::Log => {
                #[cfg(feature = "hydrate")]
                log::error!("fetching {:?} books failed: {}", self.scope, notice.message);
                #[cfg(not(feature = "hydrate"))]
                let _ = notice;
            }
        }
    }

    /// Run one write against book `id` and settle it into the list.
    #[cfg(feature = "hydrate")]
    pub fn mutate<F, Fut>(self, action: Action, id: String, call: F)
    where
        F: FnOnce(String, String) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<MutationResponse, ApiError>> + 'static,
    {
        leptos::task::spawn_local(async move {
            let result = match self.session.get_untracked().require_token() {
                Ok(token) => call(token, id.clone()).await,
                Err(err) => Err(err),
            };
            if settle_write(self.books, self.toasts, action, &id, result) {
                self.fetch();
            }
        });
    }
}

/// Raise the notification for a finished write and patch the list if the
/// page still holds it. Returns whether a refetch is due.
///
/// The toast queue lives in the app root, so it outlives the page.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn settle_write(
    books: RwSignal<ListState<Book>>,
    toasts: RwSignal<ToastState>,
    action: Action,
    id: &str,
    result: Result<MutationResponse, ApiError>,
) -> bool {
    let notice = action.notice(&result);
    let refetch = books.try_update(|s| s.settle(action, id, result).refetch);
    notify(toasts, notice, VIEW_TOAST_MS);
    refetch == Some(true)
}

/// Heading shown instead of the grid for a settled, empty list.
pub(crate) fn empty_message(scope: BookScope) -> Option<&'static str> {
    match scope {
        BookScope::All => None,
        BookScope::Mine => Some("No books found!"),
        BookScope::Borrowed => Some("No books are borrowed!"),
    }
}

/// Rendering branch for owner-scoped lists: a failed read renders like an
/// empty one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListPhase {
    Loading,
    Empty,
    Ready,
}

impl ListPhase {
    pub(crate) fn of(state: &ListState<Book>) -> Self {
        match state.phase() {
            Phase::Loading => Self::Loading,
            Phase::Empty | Phase::Failed => Self::Empty,
            Phase::Ready => Self::Ready,
        }
    }
}
