use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint(endpoints::LOGIN),
        format!("{}/api/auth/login", api_base().trim_end_matches('/'))
    );
}

#[test]
fn api_base_is_absolute_url() {
    assert!(api_base().starts_with("http"));
}

#[test]
fn check_status_passes_success_body_through() {
    assert_eq!(check_status(200, true, "{}".to_owned()), Ok("{}".to_owned()));
}

#[test]
fn check_status_maps_failure_to_backend_message() {
    let err = check_status(401, false, r#"{"message":"Unauthorized"}"#.to_owned()).unwrap_err();
    assert_eq!(err.message_or("fallback"), "Unauthorized");
    assert!(err.is_unauthorized());
}
