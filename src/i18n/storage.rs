// SPDX-License-Identifier: MPL-2.0
//! Durable key/value storage for the chosen language.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key under which the resolved language code is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "chopexpress-language";

/// Minimal string storage, the desktop counterpart of `localStorage`.
pub trait LanguageStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage.
///
/// Clones share the same entries, so a clone handed to a fresh `I18n` acts as
/// the storage surviving a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::State("language storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let mut storage = MemoryStorage::new();
        let reloaded = storage.clone();
        storage.set(DEFAULT_STORAGE_KEY, "en").expect("set");
        assert_eq!(reloaded.get(DEFAULT_STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn poisoned_storage_reports_failed_write() {
        let mut storage = MemoryStorage::new();
        let holder = storage.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.entries.lock();
            panic!("writer crashed while holding the lock");
        })
        .join();

        let result = storage.set(DEFAULT_STORAGE_KEY, "en");
        assert!(matches!(result, Err(Error::State(_))), "got {result:?}");
    }

    #[test]
    fn missing_key_is_none() {
        assert!(MemoryStorage::new().get("nothing").is_none());
    }
}
