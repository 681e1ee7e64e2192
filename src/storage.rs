//! Key-value port for persisted preferences.
//!
//! Any `eframe::Storage` is a [`PreferenceStore`], so the GUI passes its
//! persistence backend straight through. Tests use [`MemoryStore`].

use std::collections::HashMap;

/// Minimal string key-value store.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
    fn flush(&mut self) {}
}

impl<S: eframe::Storage + ?Sized> PreferenceStore for S {
    fn get_string(&self, key: &str) -> Option<String> {
        eframe::Storage::get_string(self, key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        eframe::Storage::set_string(self, key, value);
    }

    fn flush(&mut self) {
        eframe::Storage::flush(self);
    }
}

/// In-memory store, used by tests and as a fallback when the platform
/// provides no persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a key, as an external "clear site data" would.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simple mock eframe storage for testing the blanket adapter
    struct MockStorage {
        data: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    fn write_through(store: &mut dyn PreferenceStore) {
        store.set_string("k", "v".to_string());
        store.flush();
    }

    #[test]
    fn test_eframe_storage_is_a_preference_store() {
        let mut storage = MockStorage {
            data: HashMap::new(),
            flushes: 0,
        };
        write_through(&mut storage);

        assert_eq!(PreferenceStore::get_string(&storage, "k"), Some("v".to_string()));
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get_string("k"), Some("v".to_string()));
        assert_eq!(store.remove("k"), Some("v".to_string()));
        assert_eq!(store.remove("k"), None);
        assert_eq!(store.get_string("k"), None);
    }
}
