//! Error type shared by every library API caller.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in the client escalates an API failure beyond the current view.
//! Callers only need two things from an error: whether the backend supplied
//! a message, and a fallback when it did not. [`ApiError::message_or`] is the
//! single place that choice is made.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single request against the library API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, TLS, CORS, offline).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// The backend answered 2xx but flagged the operation as unsuccessful.
    #[error("rejected: {0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A protected call was attempted without a stored token.
    #[error("not logged in")]
    MissingToken,
}

/// Minimal error body the backend returns alongside failure statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and the raw response
    /// body, extracting `message` when the body is JSON that carries one.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// Backend-provided message, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Rejected(message) => Some(message.as_str()),
            Self::Transport(_) | Self::Decode(_) | Self::MissingToken => None,
        }
    }

    /// User-facing text: the backend message when present, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_owned()
    }

    /// Whether the backend refused the credential (401/403).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Status { status: 401 | 403, .. })
    }
}
