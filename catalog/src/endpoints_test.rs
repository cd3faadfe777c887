use super::*;

#[test]
fn scope_paths() {
    assert_eq!(BookScope::All.path(), "/api/books");
    assert_eq!(BookScope::Mine.path(), "/api/books/myBooks/all");
    assert_eq!(BookScope::Borrowed.path(), "/api/books/borrowed/all");
}

#[test]
fn per_book_paths() {
    assert_eq!(book("abc"), "/api/books/abc");
    assert_eq!(borrow("abc"), "/api/books/borrow/abc");
    assert_eq!(return_book("abc"), "/api/books/return/abc");
}

#[test]
fn url_strips_trailing_slash() {
    assert_eq!(url("http://localhost:5000/", LOGIN), "http://localhost:5000/api/auth/login");
    assert_eq!(url(DEFAULT_API_BASE, REGISTER), format!("{DEFAULT_API_BASE}/api/auth/register"));
}
