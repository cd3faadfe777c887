#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert_eq!(BrowserTokenStore.load(), None);
}

#[test]
fn writes_fail_outside_browser() {
    assert!(matches!(BrowserTokenStore.store("tok"), Err(StorageError::Unavailable)));
    assert!(matches!(BrowserTokenStore.clear(), Err(StorageError::Unavailable)));
}

#[test]
fn logout_surfaces_storage_error() {
    assert!(catalog::session::logout(&BrowserTokenStore).is_err());
}
