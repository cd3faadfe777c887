//! `reqwest` client for the remote library API.
//!
//! Mirrors the browser client call for call: same endpoints, same bearer
//! header, same response decoding through `catalog`. Every call resolves to
//! `Result<_, ApiError>` so command output can pick the backend message or
//! the same fallback text the browser shows.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::path::Path;

use catalog::book::{self, Book, BookDraft, BookPatch, FIELD_IMAGE, MutationResponse};
use catalog::endpoints::{self, BookScope};
use catalog::session::bearer;
use catalog::{ApiError, AuthResponse, LoginRequest, RegisterRequest};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};

use crate::CliError;

/// Image attached to a create or update request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read an image from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, CliError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_owned(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the TLS backend cannot be initialized.
    pub fn new(base: &str) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("bookshelf-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base: base.to_owned() })
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base, path)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        tracing::debug!(status = status.as_u16(), url = %resp.url(), "api response");
        let body = resp.text().await.map_err(transport)?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    fn authed(&self, method: reqwest::Method, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path)).header(AUTHORIZATION, bearer(token))
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send(self.http.post(self.url(endpoints::REGISTER)).json(req)).await?;
        AuthResponse::parse(&body)
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send(self.http.post(self.url(endpoints::LOGIN)).json(req)).await?;
        AuthResponse::parse(&body)
    }

    pub async fn books(&self, token: &str, scope: BookScope) -> Result<Vec<Book>, ApiError> {
        let body = self.send(self.authed(reqwest::Method::GET, scope.path(), token)).await?;
        book::parse_books(&body)
    }

    /// Create a book from a complete draft plus its cover image.
    pub async fn create_book(
        &self,
        token: &str,
        draft: &BookDraft,
        image: ImageUpload,
    ) -> Result<MutationResponse, ApiError> {
        let form = book_form(&draft.fields(), Some(image));
        let req = self.authed(reqwest::Method::POST, endpoints::BOOKS, token).multipart(form);
        book::parse_mutation(&self.send(req).await?)
    }

    /// Send only the changed fields, plus an image when one was chosen.
    pub async fn update_book(
        &self,
        token: &str,
        id: &str,
        patch: &BookPatch,
        image: Option<ImageUpload>,
    ) -> Result<MutationResponse, ApiError> {
        let form = book_form(&patch.fields(), image);
        let req = self.authed(reqwest::Method::PATCH, &endpoints::book(id), token).multipart(form);
        book::parse_mutation(&self.send(req).await?)
    }

    pub async fn delete_book(&self, token: &str, id: &str) -> Result<MutationResponse, ApiError> {
        let req = self.authed(reqwest::Method::DELETE, &endpoints::book(id), token);
        book::parse_mutation(&self.send(req).await?)
    }

    pub async fn borrow_book(&self, token: &str, id: &str) -> Result<MutationResponse, ApiError> {
        let req = self.authed(reqwest::Method::POST, &endpoints::borrow(id), token);
        book::parse_mutation(&self.send(req).await?)
    }

    pub async fn return_book(&self, token: &str, id: &str) -> Result<MutationResponse, ApiError> {
        let req = self.authed(reqwest::Method::POST, &endpoints::return_book(id), token);
        book::parse_mutation(&self.send(req).await?)
    }
}

fn book_form(fields: &[(&str, &str)], image: Option<ImageUpload>) -> Form {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text((*name).to_owned(), (*value).to_owned());
    }
    if let Some(image) = image {
        form = form.part(FIELD_IMAGE, Part::bytes(image.bytes).file_name(image.file_name));
    }
    form
}
