use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::sync::Arc;
use verity::adapters::storage::MemoryKeyValueStore;
use verity::domain::models::HISTORY_CAPACITY;
use verity::{HistoryEntry, HistoryStore};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    /// Property: after N inserts the history holds min(N, capacity) entries,
    /// newest first, and the persisted copy round-trips to the same list.
    #[test]
    fn prop_history_bounded_and_ordered(inputs in prop::collection::vec("[a-z ]{0,12}", 0..45)) {
        runtime().block_on(async {
            let backend = MemoryKeyValueStore::new();
            let mut store = HistoryStore::load(Arc::new(backend.clone())).await;

            for input in &inputs {
                store.insert_most_recent(HistoryEntry::pending(input.clone())).await.unwrap();
            }

            let expected: Vec<&String> = inputs.iter().rev().take(HISTORY_CAPACITY).collect();
            let actual: Vec<&String> = store.entries().iter().map(|e| &e.input_text).collect();
            prop_assert_eq!(store.len(), inputs.len().min(HISTORY_CAPACITY));
            prop_assert_eq!(actual, expected);

            let reloaded = HistoryStore::load(Arc::new(backend)).await;
            prop_assert_eq!(reloaded.entries(), store.entries());
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Property: selecting an index never changes the entries, and an
    /// out-of-range index leaves the previous selection in place.
    #[test]
    fn prop_select_is_non_destructive(count in 1usize..25, pick in 0usize..40) {
        runtime().block_on(async {
            let mut store = HistoryStore::load(Arc::new(MemoryKeyValueStore::new())).await;
            for i in 0..count {
                store.insert_most_recent(HistoryEntry::pending(format!("{i}"))).await.unwrap();
            }
            let before = store.entries().to_vec();

            let selected = store.select(pick).is_ok();

            prop_assert_eq!(selected, pick < store.len());
            let expected_selection = if pick < store.len() { pick } else { 0 };
            prop_assert_eq!(store.active_selection(), Some(expected_selection));
            prop_assert_eq!(store.entries(), before.as_slice());
            Ok::<(), TestCaseError>(())
        })?;
    }
}
