use super::*;
use catalog::MemoryTokenStore;

#[test]
fn default_is_not_loaded_and_never_redirects() {
    let state = SessionState::default();
    assert!(!state.loaded);
    assert!(!state.is_authenticated());
    assert_eq!(state.redirect_for(Route::Home), None);
}

#[test]
fn restored_without_token_redirects_protected_routes() {
    let state = SessionState::from_store(&MemoryTokenStore::default());
    assert!(state.loaded);
    assert_eq!(state.redirect_for(Route::MyBooks), Some(Route::Login));
    assert_eq!(state.redirect_for(Route::SignUp), None);
}

#[test]
fn restored_with_token_allows_protected_routes() {
    let state = SessionState::from_store(&MemoryTokenStore::with_token("tok"));
    assert!(state.is_authenticated());
    assert_eq!(state.redirect_for(Route::AddBook), None);
    assert_eq!(state.require_token(), Ok("tok".to_owned()));
}

#[test]
fn empty_token_is_not_a_session() {
    let state = SessionState { token: Some(String::new()), loaded: true };
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
    assert_eq!(state.require_token(), Err(ApiError::MissingToken));
}

#[test]
fn sign_in_then_sign_out() {
    let mut state = SessionState::default();
    state.sign_in("tok".to_owned());
    assert!(state.is_authenticated());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert_eq!(state.redirect_for(Route::Home), Some(Route::Login));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_has_no_token() {
    let state = SessionState::restore();
    assert!(state.loaded);
    assert_eq!(state.token, None);
}
