//! Browser `localStorage` home of the session token.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR and native test builds see an empty store
//! and refuse writes, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use catalog::TokenStore;
#[cfg(feature = "hydrate")]
use catalog::session::TOKEN_STORAGE_KEY;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage rejected the write")]
    Rejected,
}

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for BrowserTokenStore {
    type Error = StorageError;

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) -> Result<(), Self::Error> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|_| StorageError::Rejected)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), Self::Error> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|_| StorageError::Rejected)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
