use std::collections::HashMap;

use crate::error::Result;
use crate::store::KvStore;

/// In-memory key-value store for testing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::FAVORITES_KEY;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        /// Seed a serialized favorites list under the default key.
        pub fn with_favorites(mut self, ids: &[&str]) -> Self {
            let serialized = serde_json::to_string(ids).unwrap();
            self.store.set(FAVORITES_KEY, &serialized).unwrap();
            self
        }

        /// Seed a raw value under the default key, valid or not.
        pub fn with_raw_favorites(mut self, raw: &str) -> Self {
            self.store.set(FAVORITES_KEY, raw).unwrap();
            self
        }
    }
}
