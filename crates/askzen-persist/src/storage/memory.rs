use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::KeyValueStore;
use crate::error::{PersistError, Result};

/// In-memory backend. Clones share the same map, so a store can be
/// "reopened" over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> PersistError {
    PersistError::Internal("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
