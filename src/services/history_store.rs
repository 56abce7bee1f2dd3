//! Bounded, persisted verification history.
//!
//! Entries are kept most-recent-first and never exceed the configured
//! capacity; inserting into a full history evicts from the tail. Every
//! mutation rewrites the persisted copy in full before returning.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::errors::{OutOfRange, StorageError};
use crate::domain::models::{HistoryEntry, HISTORY_CAPACITY};
use crate::domain::ports::KeyValueStore;

pub use crate::domain::models::DEFAULT_STORAGE_KEY;

/// Owns the history cache and the active selection.
pub struct HistoryStore<S: KeyValueStore> {
    storage: Arc<S>,
    key: String,
    capacity: usize,
    entries: Vec<HistoryEntry>,
    active: Option<usize>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load the persisted history with the default key and capacity.
    pub async fn load(storage: Arc<S>) -> Self {
        Self::load_with(storage, DEFAULT_STORAGE_KEY, HISTORY_CAPACITY).await
    }

    /// Load the persisted history under `key`.
    ///
    /// Never fails: a missing, unreadable or unparseable value yields an
    /// empty history. A persisted list longer than `capacity` is cut down to
    /// its `capacity` most recent entries.
    pub async fn load_with(storage: Arc<S>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let capacity = capacity.max(1);

        let entries = match storage.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(capacity);
                    entries
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "persisted history is unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read persisted history, starting empty");
                Vec::new()
            }
        };

        debug!(key = %key, entries = entries.len(), capacity, "history loaded");

        Self {
            storage,
            key,
            capacity,
            entries,
            active: None,
        }
    }

    /// Prepend `entry`, evict beyond capacity, persist, and select it.
    ///
    /// Always returns index 0. The in-memory history is updated even when
    /// persisting fails; the error reports that the stored copy is stale.
    pub async fn insert_most_recent(&mut self, entry: HistoryEntry) -> Result<usize, StorageError> {
        self.entries.insert(0, entry);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!(evicted, "evicted oldest history entries");
        }
        self.active = Some(0);

        self.persist().await?;
        info!(entries = self.entries.len(), "history entry added");
        Ok(0)
    }

    /// Drop every entry and delete the persisted copy.
    pub async fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.active = None;
        self.storage.remove(&self.key).await?;
        info!("history cleared");
        Ok(())
    }

    pub fn get_at(&self, index: usize) -> Result<&HistoryEntry, OutOfRange> {
        self.entries.get(index).ok_or(OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Make `index` the active entry and return it for replay.
    ///
    /// An invalid index leaves the current selection untouched.
    pub fn select(&mut self, index: usize) -> Result<&HistoryEntry, OutOfRange> {
        if index >= self.entries.len() {
            return Err(OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.active = Some(index);
        Ok(&self.entries[index])
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn active_selection(&self) -> Option<usize> {
        self.active
    }

    pub fn active_entry(&self) -> Option<&HistoryEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(&self.key, &raw).await
    }
}
