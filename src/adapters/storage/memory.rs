//! In-memory key-value store.
//!
//! Holds values in a map for the lifetime of the process. Used as the fake
//! backend in tests and by embedders that do not want anything on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Key-value store backed by a `HashMap`.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a service persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.values.read().await.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
