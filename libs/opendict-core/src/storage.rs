//! Persistent key-value storage seam.
//!
//! The entry store keeps three JSON documents in a synchronous, string-keyed
//! store. Backends only need to get and set whole documents.

use crate::error::{Result, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Key of the word -> entry document.
pub const KEY_ENTRIES: &str = "opendict:entries";
/// Key of the recent searches document.
pub const KEY_RECENTS: &str = "opendict:recents";
/// Key of the play statistics document.
pub const KEY_PLAY: &str = "opendict:play";

/// Synchronous string-keyed document storage.
pub trait KeyValueStorage: Send + Sync {
    /// Whether the backend can persist anything at all.
    fn is_available(&self) -> bool {
        true
    }

    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for environments without a persistent primitive.
///
/// Reads find nothing and writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStorage;

impl KeyValueStorage for NullStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
