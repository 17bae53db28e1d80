//! Inverted index over scalar record fields.
//!
//! Maps field name -> [`IndexKey`] -> ordered set of [`RecordId`]s. The index is
//! a derived structure: it is only ever changed through
//! [`InvertedIndex::index_insert`] and [`InvertedIndex::index_remove`], which the
//! store calls in lockstep with its slot writes.
//!
//! # Indexed fields
//!
//! By default only the leading run of scalar fields is indexed. Indexing a
//! record walks its fields in order and stops at the first array or object;
//! later fields are stored but cannot be queried:
//!
//! ```ignore
//! // "a" is indexed, "c" is not
//! db.insert(record(json!({ "a": 1, "b": { "nested": true }, "c": 2 })));
//! ```
//!
//! [`IndexMode::AllScalars`] indexes every scalar field regardless of position.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;
use transientdb_core::{
    key::IndexKey,
    record::{Record, RecordId, all_scalars, leading_scalars},
};

type IdSet = BTreeSet<RecordId>;
type FieldIndex = HashMap<IndexKey, IdSet>;

/// Which scalar fields of a record get indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Index fields up to, not including, the first composite field.
    #[default]
    LeadingScalars,
    /// Index every scalar field.
    AllScalars,
}

/// Statistics about the index contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of distinct indexed field names.
    pub fields: usize,
    /// Number of distinct (field, value) entries.
    pub entries: usize,
    /// Total number of ids across all entries.
    pub postings: usize,
}

/// Field/value inverted index.
///
/// Id sets iterate in ascending order. Identifiers strictly increase with
/// insertion, so this is also insertion order, and it is the order queries
/// return their results in.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    mode: IndexMode,
    fields: HashMap<String, FieldIndex>,
}

impl InvertedIndex {
    pub fn new(mode: IndexMode) -> Self {
        Self {
            mode,
            fields: HashMap::new(),
        }
    }

    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    /// Adds `id` to the entry of every indexed field of `record`.
    ///
    /// Field maps and value entries are created on first use. Returns the
    /// number of fields indexed.
    pub fn index_insert(&mut self, id: RecordId, record: &Record) -> usize {
        let mut indexed = 0;

        for (field, key) in self.indexed_fields(record) {
            self.fields
                .entry(field.clone())
                .or_default()
                .entry(key)
                .or_default()
                .insert(id);

            indexed += 1;
        }

        tracing::trace!(
            target: "transientdb::index",
            record_id = id,
            fields = indexed,
            "Indexed record"
        );

        indexed
    }

    /// Removes `id` from the entry of every indexed field of `record`.
    ///
    /// Missing fields, values or ids are skipped. Entries and field maps left
    /// empty are dropped.
    pub fn index_remove(&mut self, id: RecordId, record: &Record) {
        for (field, key) in self.indexed_fields(record) {
            let Some(field_index) = self.fields.get_mut(field) else {
                continue;
            };

            if let Some(ids) = field_index.get_mut(&key) {
                ids.remove(&id);

                if ids.is_empty() {
                    field_index.remove(&key);
                }
            }

            if field_index.is_empty() {
                self.fields.remove(field);
            }
        }

        tracing::trace!(
            target: "transientdb::index",
            record_id = id,
            "Unindexed record"
        );
    }

    /// Returns a copy of the ids whose record has `field == value`.
    ///
    /// Unknown fields, unknown values and composite values all yield an empty
    /// set. The returned set is owned by the caller; changing it does not touch
    /// the index.
    pub fn lookup(&self, field: &str, value: &Value) -> BTreeSet<RecordId> {
        self.entry(field, value)
            .cloned()
            .unwrap_or_default()
    }

    /// Borrowing variant of [`lookup`](Self::lookup) for read-only use.
    pub fn entry(&self, field: &str, value: &Value) -> Option<&BTreeSet<RecordId>> {
        let key = IndexKey::from_value(value)?;

        self.fields
            .get(field)?
            .get(&key)
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            fields: self.fields.len(),
            ..IndexStats::default()
        };

        for field_index in self.fields.values() {
            stats.entries += field_index.len();
            stats.postings += field_index.values().map(BTreeSet::len).sum::<usize>();
        }

        stats
    }

    fn indexed_fields<'r>(&self, record: &'r Record) -> Vec<(&'r String, IndexKey)> {
        let keyed = |(field, value): (&'r String, &'r Value)| {
            IndexKey::from_value(value).map(|key| (field, key))
        };

        match self.mode {
            IndexMode::LeadingScalars => leading_scalars(record).filter_map(keyed).collect(),
            IndexMode::AllScalars => all_scalars(record).filter_map(keyed).collect(),
        }
    }
}
