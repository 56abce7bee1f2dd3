use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Minimal string key-value storage the history store persists through.
///
/// Implementations hold whole values: `set` replaces any previous value for
/// the key, `remove` deletes it entirely. Removing an absent key succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` and its value.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
