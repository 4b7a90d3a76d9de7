//! `window.localStorage` backend for the calculator's field store.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be missing (private browsing, disabled cookies) or full. Both
//! surface as [`StorageError`] and the field store falls back to in-memory
//! values, so the calculator keeps working for the session.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use calculate::{Storage, StorageError};

/// Handle to the page's `localStorage`. Looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}
