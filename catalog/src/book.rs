//! Book records and the request/response shapes that carry them.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, `bookImage`, `createdAt`,
//! `borrowedBy`) through serde renames so both clients can decode response
//! bodies directly. Every optional field defaults so a sparse record from the
//! backend still renders.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;

use crate::error::ApiError;

/// Multipart field name for the title.
pub const FIELD_TITLE: &str = "title";
/// Multipart field name for the author.
pub const FIELD_AUTHOR: &str = "author";
/// Multipart field name for the genre.
pub const FIELD_GENRE: &str = "genre";
/// Multipart field name for the cover image file.
pub const FIELD_IMAGE: &str = "bookImage";

/// A book as held by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    /// URL of the uploaded cover image.
    #[serde(rename = "bookImage", default)]
    pub image_url: String,
    /// Backend-computed borrow eligibility.
    #[serde(default)]
    pub availability: bool,
    /// RFC 3339 creation timestamp.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "borrowedBy", default, skip_serializing_if = "Option::is_none")]
    pub borrowed_by: Option<Borrower>,
}

/// Reference to the user currently holding a book.
///
/// The backend populates the reference on owner-scoped lists and leaves it as
/// a bare id elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Borrower {
    Populated {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl Borrower {
    /// Display name when the reference was populated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated { name, .. } => name.as_deref(),
            Self::Id(_) => None,
        }
    }
}

impl Book {
    /// Calendar date of creation as seen at `offset`, if the timestamp
    /// parses.
    #[must_use]
    pub fn created_on(&self, offset: UtcOffset) -> Option<time::Date> {
        let raw = self.created_at.as_deref()?;
        OffsetDateTime::parse(raw, &Rfc3339).ok().map(|at| at.to_offset(offset).date())
    }

    /// A book is "new" on the local day it was created. `today` and
    /// `offset` both describe the viewer's clock.
    #[must_use]
    pub fn is_new_on(&self, today: time::Date, offset: UtcOffset) -> bool {
        self.created_on(offset) == Some(today)
    }

    #[must_use]
    pub fn availability_label(&self) -> &'static str {
        if self.availability { "Available" } else { "Borrowed" }
    }

    /// Label of the catalog card's borrow button.
    #[must_use]
    pub fn borrow_action_label(&self) -> &'static str {
        if self.availability { "Borrow" } else { "Borrowed" }
    }

    /// Borrow status line shown on the owner's own cards.
    #[must_use]
    pub fn borrower_label(&self) -> String {
        match &self.borrowed_by {
            None => "Not borrowed".to_owned(),
            Some(borrower) => match borrower.name() {
                Some(name) => format!("Borrowed by {name}"),
                None => "Borrowed".to_owned(),
            },
        }
    }
}

/// Body of every collection read: `{ "data": [...] }`.
#[derive(Debug, Default, Deserialize)]
pub struct BooksResponse {
    #[serde(default)]
    pub data: Vec<Book>,
}

/// Body of every mutation: a confirmation message and, for create/update,
/// the resulting book.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Book>,
}

impl MutationResponse {
    /// Confirmation text, or `fallback` when the backend sent none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Decode a collection read body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not a books envelope.
pub fn parse_books(body: &str) -> Result<Vec<Book>, ApiError> {
    serde_json::from_str::<BooksResponse>(body)
        .map(|r| r.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a mutation body. An empty body decodes to an empty response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is non-empty and not JSON.
pub fn parse_mutation(body: &str) -> Result<MutationResponse, ApiError> {
    if body.trim().is_empty() {
        return Ok(MutationResponse::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Text fields of the add/edit book forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl BookDraft {
    /// Names of required text fields that are empty after trimming.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_TITLE, &self.title),
            (FIELD_AUTHOR, &self.author),
            (FIELD_GENRE, &self.genre),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Multipart text parts in submission order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (FIELD_TITLE, self.title.as_str()),
            (FIELD_AUTHOR, self.author.as_str()),
            (FIELD_GENRE, self.genre.as_str()),
        ]
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
        }
    }
}

/// Partial update; only `Some` fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookPatch {
    /// Multipart text parts for the fields being changed.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            (FIELD_TITLE, self.title.as_deref()),
            (FIELD_AUTHOR, self.author.as_deref()),
            (FIELD_GENRE, self.genre.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none()
    }
}

impl From<BookDraft> for BookPatch {
    fn from(draft: BookDraft) -> Self {
        Self {
            title: Some(draft.title),
            author: Some(draft.author),
            genre: Some(draft.genre),
        }
    }
}
