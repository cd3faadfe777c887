use super::*;

#[test]
fn from_status_extracts_backend_message() {
    let err = ApiError::from_status(404, r#"{"message":"Book not found"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 404, message: Some("Book not found".to_owned()) }
    );
    assert_eq!(err.message_or("Error deleting book"), "Book not found");
}

#[test]
fn from_status_without_json_body_uses_fallback() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.backend_message(), None);
    assert_eq!(err.message_or("Error returning book"), "Error returning book");
}

#[test]
fn blank_backend_message_is_ignored() {
    let err = ApiError::from_status(400, r#"{"message":"   "}"#);
    assert_eq!(err.message_or("Signup failed"), "Signup failed");
}

#[test]
fn rejected_carries_message() {
    let err = ApiError::Rejected("Invalid credentials".to_owned());
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
}

#[test]
fn transport_never_leaks_into_user_message() {
    let err = ApiError::Transport("dns error".to_owned());
    assert_eq!(err.message_or("Error fetching books"), "Error fetching books");
    assert_eq!(err.to_string(), "request failed: dns error");
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::MissingToken.is_unauthorized());
    assert!(ApiError::from_status(401, "{}").is_unauthorized());
    assert!(ApiError::from_status(403, "{}").is_unauthorized());
    assert!(!ApiError::from_status(500, "{}").is_unauthorized());
}

#[test]
fn status_display_includes_message() {
    let err = ApiError::from_status(409, r#"{"message":"Book already borrowed"}"#);
    assert_eq!(err.to_string(), "HTTP 409: Book already borrowed");
    let bare = ApiError::from_status(500, "");
    assert_eq!(bare.to_string(), "HTTP 500: no message");
}
