use super::*;
use axum::extract::{Multipart, Path as UrlPath};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

// =============================================================
// Mock backend
// =============================================================

const TOKEN: &str = "tok-123";

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer tok-123")
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Not authorized, token failed" })))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "success": true, "message": "Login successful", "token": TOKEN })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "message": "Invalid credentials" })))
    }
}

async fn register(Json(body): Json<Value>) -> Json<Value> {
    if body["email"] == "taken@example.com" {
        Json(json!({ "success": false, "message": "User already exists" }))
    } else {
        Json(json!({ "success": true, "message": "User registered" }))
    }
}

async fn list(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({ "data": [
            { "_id": "b1", "title": "Dune", "author": "Herbert", "genre": "SF", "bookImage": "http://img/b1", "availability": true }
        ] })),
    )
}

/// Echo the multipart field names back as the book's genre so tests can see
/// exactly which parts were sent.
async fn upsert(headers: HeaderMap, id: Option<UrlPath<String>>, mut form: Multipart) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut names = Vec::new();
    let mut title = String::new();
    while let Some(field) = form.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await.unwrap();
        if name == "title" {
            title = String::from_utf8(bytes.to_vec()).unwrap();
        }
        names.push(match file_name {
            Some(file) => format!("{name}={file}"),
            None => name,
        });
    }
    let id = id.map_or_else(|| "new".to_owned(), |UrlPath(id)| id);
    (
        StatusCode::OK,
        Json(json!({
            "message": "Book saved",
            "data": { "_id": id, "title": title, "author": "A", "genre": names.join(","), "availability": true }
        })),
    )
}

async fn create(headers: HeaderMap, form: Multipart) -> (StatusCode, Json<Value>) {
    upsert(headers, None, form).await
}

async fn update(headers: HeaderMap, id: UrlPath<String>, form: Multipart) -> (StatusCode, Json<Value>) {
    upsert(headers, Some(id), form).await
}

async fn remove(headers: HeaderMap) -> (StatusCode, String) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, String::new());
    }
    (StatusCode::OK, String::new())
}

async fn borrow() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": "Book is not available" })))
}

async fn give_back() -> Json<Value> {
    Json(json!({ "message": "Book returned successfully" }))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/books", get(list).post(create))
        .route("/api/books/{id}", patch(update).delete(remove))
        .route("/api/books/borrow/{id}", post(borrow))
        .route("/api/books/return/{id}", post(give_back));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn image() -> ImageUpload {
    ImageUpload { file_name: "cover.png".to_owned(), bytes: vec![0x89, b'P', b'N', b'G'] }
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_returns_token() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "secret".to_owned() };
    let token = api.login(&req).await.and_then(AuthResponse::into_token).unwrap();
    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn bad_credentials_surface_backend_message() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "nope".to_owned() };
    let err = api.login(&req).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn rejected_registration_is_an_error_despite_200() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let req = RegisterRequest {
        name: "N".to_owned(),
        email: "taken@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let err = api.register(&req).await.and_then(AuthResponse::into_message).unwrap_err();
    assert_eq!(err, ApiError::Rejected("User already exists".to_owned()));
}

// =============================================================
// Books
// =============================================================

#[tokio::test]
async fn list_sends_bearer_token() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let books = api.books(TOKEN, BookScope::All).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");

    let err = api.books("wrong", BookScope::All).await.unwrap_err();
    assert_eq!(err.message_or("x"), "Not authorized, token failed");
}

#[tokio::test]
async fn create_sends_all_fields_and_image_part() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let draft = BookDraft { title: "Dune".to_owned(), author: "Herbert".to_owned(), genre: "SF".to_owned() };
    let resp = api.create_book(TOKEN, &draft, image()).await.unwrap();
    assert_eq!(resp.message_or("Book added"), "Book saved");
    let book = resp.data.unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.genre, "title,author,genre,bookImage=cover.png");
}

#[tokio::test]
async fn update_sends_only_changed_fields() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let patch = BookPatch { title: Some("Dune Messiah".to_owned()), ..BookPatch::default() };
    let resp = api.update_book(TOKEN, "b1", &patch, None).await.unwrap();
    let book = resp.data.unwrap();
    assert_eq!(book.id, "b1");
    assert_eq!(book.genre, "title");
}

#[tokio::test]
async fn empty_delete_body_is_a_silent_success() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let resp = api.delete_book(TOKEN, "b1").await.unwrap();
    assert_eq!(resp.message_or("Book deleted"), "Book deleted");
}

#[tokio::test]
async fn borrow_refusal_and_return_confirmation() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let err = api.borrow_book(TOKEN, "b1").await.unwrap_err();
    assert_eq!(err.message_or("Error borrowing book"), "Book is not available");
    let resp = api.return_book(TOKEN, "b1").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("Book returned successfully"));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = api.books(TOKEN, BookScope::Mine).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
