//! Session token persistence and the route guard built on it.
//!
//! DESIGN
//! ======
//! The token is opaque: the client never inspects, verifies, or expires it.
//! Presence of a non-empty string is the whole access decision; the backend
//! remains the real authority and rejects requests it does not accept.
//! Storage sits behind [`TokenStore`] so the browser (`localStorage`), the
//! CLI (a file), and tests (memory) share the same lifecycle helpers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::convert::Infallible;

use crate::routes::Route;

/// Storage key the browser client keeps the token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent home of the session token.
pub trait TokenStore {
    type Error: std::error::Error;

    /// Current token, if one is stored. Read failures count as absent.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the backend-specific error when the write fails.
    fn store(&self, token: &str) -> Result<(), Self::Error>;

    /// Remove the stored token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns the backend-specific error when the removal fails.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Outcome of guarding a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

/// A token is present when it is a non-empty string.
#[must_use]
pub fn has_token(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// Decide whether `route` may render given the stored token.
#[must_use]
pub fn guard(route: Route, token: Option<&str>) -> Access {
    if !route.is_protected() || has_token(token) {
        Access::Allow
    } else {
        Access::Redirect(Route::Login)
    }
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Clear the token and return where the user lands afterwards.
///
/// # Errors
///
/// Propagates the store's error if the token could not be removed.
pub fn logout<S: TokenStore>(store: &S) -> Result<Route, S::Error> {
    store.clear()?;
    Ok(Route::Login)
}

/// Token store held in memory; used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    type Error = Infallible;

    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) -> Result<(), Self::Error> {
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
