pub mod json_backend;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over the durable key-value facility the store persists into.
/// Values are opaque strings; the store owns their encoding.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Non-durable backend used in tests and embedding scenarios. Clones share the
/// same cells, so a handle kept outside the store observes its writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cells: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.cells
            .lock()
            .map_err(|_| StoreError::Storage("memory storage lock poisoned".into()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

pub use json_backend::{app_data_dir, JsonFileStorage};
