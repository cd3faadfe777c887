use super::*;

#[test]
fn ok_result_becomes_success() {
    let notice = Notice::from_result(&Ok("Book borrowed".to_owned()), "unused");
    assert_eq!(notice, Notice::success("Book borrowed"));
    assert!(!notice.is_error());
}

#[test]
fn backend_message_wins_over_fallback() {
    let err = ApiError::from_status(400, r#"{"message":"Book is not available"}"#);
    let notice = Notice::from_result(&Err(err), "Error borrowing book");
    assert_eq!(notice, Notice::error("Book is not available"));
}

#[test]
fn fallback_used_for_transport_errors() {
    let err = ApiError::Transport("offline".to_owned());
    let notice = Notice::from_result(&Err(err), "Error returning book");
    assert!(notice.is_error());
    assert_eq!(notice.message, "Error returning book");
}
