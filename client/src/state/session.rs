//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the token held in `localStorage` as a reactive value so the route
//! guard and the navigation shell re-render on login and logout. The server
//! render never sees storage, so `loaded` stays false until the browser has
//! restored the token; guards hold off redirecting until then.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use catalog::session::{self, Access, TokenStore};
use catalog::{ApiError, Route};

use crate::util::storage::BrowserTokenStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    /// Whether the stored token has been read in this tab.
    pub loaded: bool,
}

impl SessionState {
    /// Read the token persisted in browser storage.
    pub fn restore() -> Self {
        Self::from_store(&BrowserTokenStore)
    }

    pub fn from_store<S: TokenStore>(store: &S) -> Self {
        Self { token: store.load(), loaded: true }
    }

    /// The token, when present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.token.clone().filter(|t| session::has_token(Some(t.as_str())))
    }

    /// Token for an authenticated request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when no token is stored.
    pub fn require_token(&self) -> Result<String, ApiError> {
        self.token().ok_or(ApiError::MissingToken)
    }

    pub fn is_authenticated(&self) -> bool {
        self.loaded && session::has_token(self.token.as_deref())
    }

    /// Redirect target for `route`, once the token has been restored.
    pub fn redirect_for(&self, route: Route) -> Option<Route> {
        if !self.loaded {
            return None;
        }
        match session::guard(route, self.token.as_deref()) {
            Access::Allow => None,
            Access::Redirect(target) => Some(target),
        }
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.loaded = true;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.loaded = true;
    }
}
