//! Persistent field store.
//!
//! DESIGN
//! ======
//! A [`FieldStore`] wraps a [`Storage`] backend (browser `localStorage` in the
//! client, [`MemoryStorage`] elsewhere) and keeps a JSON cache in front of it.
//! Each key is read from the backend at most once; every `set` updates the
//! cache and writes through.
//!
//! ERROR HANDLING
//! ==============
//! Storage never fails the caller. An absent, unreadable or wrongly-shaped key
//! yields the caller's default and nothing is written back. A failed write is
//! logged and the cached value stays authoritative for the rest of the session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Storage keys used by the calculator.
pub mod keys {
    pub const WIDTH: &str = "w";
    pub const HEIGHT: &str = "h";
    pub const DETAILS: &str = "details";
    pub const TOTAL: &str = "total";
}

/// Error from a storage backend or from serializing a value for it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value backend, shaped like the web `Storage` interface.
pub trait Storage {
    /// Read the raw string stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-process backend. Contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    #[must_use]
    pub fn with_item(self, key: &str, raw: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), raw.to_owned());
        self
    }

    /// Raw stored string for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Typed, cached access to a [`Storage`] backend.
#[derive(Debug)]
pub struct FieldStore<S> {
    backend: S,
    /// `None` marks a key that was read and found absent or unusable.
    cache: HashMap<String, Option<Value>>,
}

impl<S: Storage> FieldStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read `key` as `T`, falling back to `default`.
    ///
    /// The fallback is used when the key is absent, the backend fails, or the
    /// stored JSON does not have the shape of `T`. Nothing is written.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        let Some(value) = self.load(key) else {
            return default;
        };
        match T::deserialize(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key, error = %e, "stored field has unexpected shape; using default");
                default
            }
        }
    }

    /// Replace `key` with `value` and write it through.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        // Serialize straight to text so struct fields keep declaration order.
        let encoded = serde_json::to_string(value)
            .and_then(|raw| serde_json::to_value(value).map(|json| (raw, json)));
        let (raw, json) = match encoded {
            Ok(pair) => pair,
            Err(source) => {
                let err = StorageError::Serialize {
                    key: key.to_owned(),
                    source,
                };
                warn!(error = %err, "field not stored");
                return;
            }
        };
        self.cache.insert(key.to_owned(), Some(json));
        match self.backend.set_item(key, &raw) {
            Ok(()) => debug!(key, "field stored"),
            Err(e) => warn!(key, error = %e, "field kept in memory only"),
        }
    }

    /// Apply `f` to the current value (or `default`) and store the result.
    pub fn update<T, F>(&mut self, key: &str, default: T, f: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let next = f(self.get(key, default));
        self.set(key, &next);
        next
    }

    fn load(&mut self, key: &str) -> Option<&Value> {
        if self.cache.contains_key(key) {
            trace!(key, "field served from cache");
        } else {
            let parsed = self.read_backend(key);
            self.cache.insert(key.to_owned(), parsed);
        }
        self.cache.get(key).and_then(Option::as_ref)
    }

    fn read_backend(&self, key: &str) -> Option<Value> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "storage read failed; using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored field is not valid JSON; using default");
                None
            }
        }
    }
}
