//! REST calls against the remote library API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the token only exists
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; views turn the error into a
//! notification and never retry. Multipart uploads take a `web_sys::File`
//! and therefore only exist in hydrate builds.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::book::{Book, MutationResponse};
use catalog::endpoints::{self, BookScope};
use catalog::{ApiError, AuthResponse, LoginRequest, RegisterRequest};
#[cfg(feature = "hydrate")]
use catalog::book::{self, BookDraft, BookPatch, FIELD_IMAGE};
#[cfg(feature = "hydrate")]
use catalog::session::bearer;

/// Backend host, overridable at compile time with `BOOKSHELF_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("BOOKSHELF_API_URL").unwrap_or(endpoints::DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    endpoints::url(api_base(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16, ok: bool, body: String) -> Result<String, ApiError> {
    if ok {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(transport)?;
    check_status(status, ok, body)
}

#[cfg(feature = "hydrate")]
async fn send_mutation(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
) -> Result<MutationResponse, ApiError> {
    let resp = builder
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    book::parse_mutation(&read_body(resp).await?)
}

#[cfg(feature = "hydrate")]
fn book_form(fields: &[(&str, &str)], image: Option<&web_sys::File>) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(|e| js_error(&e))?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename(FIELD_IMAGE, file, &file.name())
            .map_err(|e| js_error(&e))?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn send_form(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
    form: web_sys::FormData,
) -> Result<MutationResponse, ApiError> {
    let resp = builder
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    book::parse_mutation(&read_body(resp).await?)
}

/// Register a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not an auth response.
pub async fn register(req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(endpoints::REGISTER))
            .json(req)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        AuthResponse::parse(&read_body(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(unavailable())
    }
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not an auth response.
pub async fn login(req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(endpoints::LOGIN))
            .json(req)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        AuthResponse::parse(&read_body(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(unavailable())
    }
}

/// Read one of the book collections.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not a books envelope.
pub async fn fetch_books(token: &str, scope: BookScope) -> Result<Vec<Book>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(scope.path()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        catalog::book::parse_books(&read_body(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, scope);
        Err(unavailable())
    }
}

/// Borrow a book via `POST /api/books/borrow/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend refuses.
pub async fn borrow_book(token: &str, id: &str) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_mutation(gloo_net::http::Request::post(&endpoint(&endpoints::borrow(id))), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(unavailable())
    }
}

/// Return a borrowed book via `POST /api/books/return/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend refuses.
pub async fn return_book(token: &str, id: &str) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_mutation(gloo_net::http::Request::post(&endpoint(&endpoints::return_book(id))), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(unavailable())
    }
}

/// Delete one of the user's books via `DELETE /api/books/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend refuses.
pub async fn delete_book(token: &str, id: &str) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_mutation(gloo_net::http::Request::delete(&endpoint(&endpoints::book(id))), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(unavailable())
    }
}

/// Upload a new book with its cover via multipart `POST /api/books`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the form cannot be built, the request fails,
/// or the backend refuses.
#[cfg(feature = "hydrate")]
pub async fn create_book(
    token: &str,
    draft: &BookDraft,
    image: &web_sys::File,
) -> Result<MutationResponse, ApiError> {
    let form = book_form(&draft.fields(), Some(image))?;
    send_form(gloo_net::http::Request::post(&endpoint(endpoints::BOOKS)), token, form).await
}

/// Update a book via multipart `PATCH /api/books/{id}`; the image part is
/// only sent when a replacement was chosen.
///
/// # Errors
///
/// Returns an [`ApiError`] when the form cannot be built, the request fails,
/// or the backend refuses.
#[cfg(feature = "hydrate")]
pub async fn update_book(
    token: &str,
    id: &str,
    patch: &BookPatch,
    image: Option<&web_sys::File>,
) -> Result<MutationResponse, ApiError> {
    let form = book_form(&patch.fields(), image)?;
    send_form(gloo_net::http::Request::patch(&endpoint(&endpoints::book(id))), token, form).await
}
