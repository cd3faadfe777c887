//! Paths of the remote library API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is a fixed third-party host. Callers join [`url`] with one of
//! the path builders below; nothing else in the workspace spells a path.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Production backend host.
pub const DEFAULT_API_BASE: &str = "https://library-system-backend-4rre.onrender.com";

pub const REGISTER: &str = "/api/auth/register";
pub const LOGIN: &str = "/api/auth/login";
pub const BOOKS: &str = "/api/books";

/// Which collection a list view reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookScope {
    /// Whole catalog.
    All,
    /// Books uploaded by the current user.
    Mine,
    /// Books the current user has borrowed.
    Borrowed,
}

impl BookScope {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::All => BOOKS,
            Self::Mine => "/api/books/myBooks/all",
            Self::Borrowed => "/api/books/borrowed/all",
        }
    }
}

/// `PATCH`/`DELETE` target for a single book.
#[must_use]
pub fn book(id: &str) -> String {
    format!("{BOOKS}/{id}")
}

#[must_use]
pub fn borrow(id: &str) -> String {
    format!("{BOOKS}/borrow/{id}")
}

#[must_use]
pub fn return_book(id: &str) -> String {
    format!("{BOOKS}/return/{id}")
}

/// Join a base URL and a path, tolerating a trailing slash on the base.
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
