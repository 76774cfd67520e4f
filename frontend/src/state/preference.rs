use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::DARK_MODE_KEY;
use crate::utils::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u32);

type Listener = Rc<dyn Fn(bool)>;

/// Process-wide dark-mode flag backed by a key/value store.
///
/// The stored value is read once in [`PreferenceStore::load`]; afterwards the
/// in-memory copy is authoritative and every [`set`](PreferenceStore::set)
/// writes through to storage and notifies subscribers.
pub struct PreferenceStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    dark_mode: Cell<bool>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u32>,
}

/// Decodes a stored flag. Anything other than a JSON boolean means `false`.
pub fn parse_stored(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(raw) => match serde_json::from_str::<bool>(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed stored preference {:?}: {}", raw, e);
                false
            }
        },
    }
}

impl PreferenceStore {
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        Self::load_with_key(storage, DARK_MODE_KEY)
    }

    pub fn load_with_key(storage: Box<dyn KeyValueStore>, key: &str) -> Self {
        let raw = match storage.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read preference, using default: {}", e);
                None
            }
        };
        let dark_mode = parse_stored(raw.as_deref());
        log::info!("Loaded dark mode preference: {}", dark_mode);

        Self {
            storage,
            key: key.to_string(),
            dark_mode: Cell::new(dark_mode),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> bool {
        self.dark_mode.get()
    }

    pub fn set(&self, value: bool) {
        self.dark_mode.set(value);

        let encoded = serde_json::Value::Bool(value).to_string();
        if let Err(e) = self.storage.set(&self.key, &encoded) {
            log::warn!("Failed to persist preference: {}", e);
        }

        // Snapshot so a listener may (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn toggle(&self) -> bool {
        let value = !self.get();
        self.set(value);
        value
    }

    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::{MemoryStorage, StorageError};

    struct SharedStorage(Rc<MemoryStorage>);

    impl KeyValueStore for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set(key, value)
        }
    }

    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }

    fn store_with(raw: &str) -> PreferenceStore {
        PreferenceStore::load(Box::new(MemoryStorage::with_item(DARK_MODE_KEY, raw)))
    }

    #[test]
    fn defaults_to_light_without_stored_value() {
        let store = PreferenceStore::load(Box::new(MemoryStorage::new()));
        assert!(!store.get());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = PreferenceStore::load(Box::new(MemoryStorage::new()));
        for value in [true, false, true] {
            store.set(value);
            assert_eq!(store.get(), value);
        }
    }

    #[test]
    fn reads_stored_json_boolean() {
        assert!(store_with("true").get());
        assert!(!store_with("false").get());
    }

    #[test]
    fn malformed_values_fall_back_to_false() {
        for raw in ["\"true\"", "1", "yes", "", "{\"darkMode\":true}", "null"] {
            assert!(!store_with(raw).get(), "{:?} should load as false", raw);
        }
    }

    #[test]
    fn read_failure_falls_back_to_false() {
        let store = PreferenceStore::load(Box::new(BrokenStorage));
        assert!(!store.get());
    }

    #[test]
    fn write_failure_still_updates_memory() {
        let store = PreferenceStore::load(Box::new(BrokenStorage));
        store.set(true);
        assert!(store.get());
    }

    #[test]
    fn set_persists_json_encoded_value() {
        let backing = Rc::new(MemoryStorage::new());
        let store = PreferenceStore::load(Box::new(SharedStorage(backing.clone())));

        store.set(true);
        assert_eq!(backing.get(DARK_MODE_KEY), Ok(Some("true".to_string())));
        assert!(!store.toggle());
        assert_eq!(backing.get(DARK_MODE_KEY), Ok(Some("false".to_string())));

        let reloaded = PreferenceStore::load(Box::new(SharedStorage(backing)));
        assert!(!reloaded.get());
    }

    #[test]
    fn subscribers_see_every_change_until_unsubscribed() {
        let store = PreferenceStore::load(Box::new(MemoryStorage::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = seen.clone();
            store.subscribe(move |value| seen.borrow_mut().push(value))
        };
        store.toggle();
        store.toggle();
        store.unsubscribe(id);
        store.toggle();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn custom_key_is_respected() {
        let storage = MemoryStorage::with_item("theme", "true");
        let store = PreferenceStore::load_with_key(Box::new(storage), "theme");
        assert!(store.get());
    }
}
