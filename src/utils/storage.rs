//! Key-value persistence.
//!
//! [`KeyValueStore`] abstracts the string store the panel persists into.
//! [`LocalStore`] is backed by localStorage; values are JSON-encoded via
//! [`get_json`] and [`set_json`].

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// A string-to-string store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a JSON value.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    serde_json::from_str(&json).ok()
}

/// Store a value as JSON.
pub fn set_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(data).map_err(|e| StorageError::Serialization(e.to_string()))?;
    store.set(key, &json)
}

// =============================================================================
// localStorage
// =============================================================================

/// The browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::WriteFailed)
    }
}

// =============================================================================
// In-memory
// =============================================================================

#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryStore;

#[cfg(any(test, feature = "mock"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::KeyValueStore;
    use crate::core::error::StorageError;

    /// Process-local store; clones share contents.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}
