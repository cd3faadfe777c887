//! User-facing outcome notifications.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification produced by a view action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    /// Success with the confirmed message, or error with the backend
    /// message falling back to `fallback`.
    #[must_use]
    pub fn from_result(result: &Result<String, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(message) => Self::success(message.clone()),
            Err(err) => Self::error(err.message_or(fallback)),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
