//! Slot storage for record snapshots.

use std::sync::Arc;

use transientdb_core::record::{Record, RecordId};

/// Append-only slot vector holding every inserted record.
///
/// A record's identifier is its slot index. Removing a record empties the slot
/// but never frees it, so identifiers are never handed out twice. Records are
/// kept behind an `Arc` and only ever shared immutably, so what a caller reads
/// back is always exactly what was inserted.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    slots: Vec<Option<Arc<Record>>>,
    live: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `capacity` slots before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Stores `record` in the next free slot and returns its identifier.
    pub fn append(&mut self, record: Arc<Record>) -> RecordId {
        let id = self.slots.len();
        self.slots.push(Some(record));
        self.live += 1;

        id
    }

    /// Returns the record at `id`, or `None` if the slot is empty or was never assigned.
    pub fn get(&self, id: RecordId) -> Option<Arc<Record>> {
        self.slots
            .get(id)
            .and_then(Option::clone)
    }

    /// Empties the slot at `id` and returns what it held.
    ///
    /// Removing an empty or unassigned slot is a no-op returning `None`.
    pub fn remove(&mut self, id: RecordId) -> Option<Arc<Record>> {
        let removed = self.slots
            .get_mut(id)
            .and_then(Option::take);

        if removed.is_some() {
            self.live -= 1;
        }

        removed
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever assigned, including emptied ones.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over live records in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Arc<Record>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|record| (id, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str) -> Arc<Record> {
        Arc::new(json!({ "name": name }).as_object().cloned().unwrap())
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut store = RecordStore::new();

        assert_eq!(store.append(record("a")), 0);
        assert_eq!(store.append(record("b")), 1);
        assert_eq!(store.append(record("c")), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_returns_inserted_record() {
        let mut store = RecordStore::new();
        let id = store.append(record("a"));

        assert_eq!(store.get(id).unwrap(), record("a"));
        assert!(store.get(id + 1).is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = RecordStore::new();
        let id = store.append(record("a"));

        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());
        assert!(store.remove(99).is_none());
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_removed_slots_are_not_reused() {
        let mut store = RecordStore::new();
        let first = store.append(record("a"));
        store.remove(first);

        let second = store.append(record("b"));

        assert_eq!(second, 1);
        assert_eq!(store.slot_count(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iter_skips_gaps() {
        let mut store = RecordStore::with_capacity(4);
        store.append(record("a"));
        let gap = store.append(record("b"));
        store.append(record("c"));
        store.remove(gap);

        let ids: Vec<RecordId> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
