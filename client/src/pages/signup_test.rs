use super::*;

#[test]
fn successful_registration_notifies_success() {
    let resp = AuthResponse { success: true, message: Some("User created".to_owned()), token: None };
    assert_eq!(signup_outcome(Ok(resp)), Notice::success(SIGNUP_SUCCEEDED));
}

#[test]
fn duplicate_email_shows_backend_text() {
    let err = ApiError::from_status(400, r#"{"message":"User already exists"}"#);
    assert_eq!(signup_outcome(Err(err)), Notice::error("User already exists"));
}

#[test]
fn unsuccessful_body_uses_fallback_when_silent() {
    let resp = AuthResponse { success: false, message: None, token: None };
    assert_eq!(signup_outcome(Ok(resp)), Notice::error(SIGNUP_FAILED));
}
