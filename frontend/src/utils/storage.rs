use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key: {0}")]
    Read(String),
    #[error("failed to write key: {0}")]
    Write(String),
}

/// Minimal string key/value persistence used by the preference store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`, looked up on each access.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }

    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{}: {:?}", key, e)))
    }
}

/// In-process store for when `localStorage` is blocked (private browsing,
/// sandboxed iframes). Values live until the page is closed.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Picks `localStorage` when the browser allows it, memory otherwise.
pub fn default_storage() -> Box<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Box::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, preferences will not persist");
        Box::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("darkMode"), Ok(None));
    }

    #[test]
    fn memory_storage_overwrites() {
        let storage = MemoryStorage::with_item("darkMode", "false");
        storage.set("darkMode", "true").unwrap();
        assert_eq!(storage.get("darkMode"), Ok(Some("true".to_string())));
    }

    #[test]
    fn storage_error_messages() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "local storage is not available"
        );
        assert_eq!(
            StorageError::Write("darkMode: quota".into()).to_string(),
            "failed to write key: darkMode: quota"
        );
    }
}
