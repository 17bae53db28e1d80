//! In-memory record store with automatic equality indexing.
//!
//! This module provides [`TransientDb`], which owns a [`RecordStore`] and the
//! [`InvertedIndex`] derived from it, and keeps the two in lockstep.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use transientdb_core::{
    document::DocumentExt,
    error::TransientDbResult,
    query::Query,
    record::{Record, RecordId, record_from_value},
};

use crate::{
    engine::candidate_ids,
    index::{IndexMode, IndexStats, InvertedIndex},
    records::RecordStore,
};

/// Single-table in-memory document store.
///
/// Every inserted record is kept as an immutable snapshot and its scalar
/// fields are indexed, so equality queries never scan the whole table.
///
/// # Concurrency
///
/// `TransientDb` has no internal locking. Mutation takes `&mut self`; to share
/// an instance across threads, wrap the whole store in a lock.
///
/// # Example
///
/// ```ignore
/// use transientdb::{memory::TransientDb, query::Query};
/// use serde_json::json;
///
/// let mut db = TransientDb::new();
/// db.insert_value(json!({ "name": "a", "type": "x" }))?
///     .insert_value(json!({ "name": "b", "type": "x" }))?
///     .insert_value(json!({ "name": "c", "type": "y" }))?;
///
/// assert_eq!(db.find(&Query::eq("type", "x")).len(), 2);
///
/// db.remove_where(&Query::eq("name", "b"));
/// assert_eq!(db.find(&Query::eq("type", "x")).len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TransientDb {
    records: RecordStore,
    index: InvertedIndex,
}

impl TransientDb {
    /// Creates a new empty store with the default index mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a `TransientDb` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use transientdb::memory::{IndexMode, TransientDb};
    ///
    /// let db = TransientDb::builder()
    ///     .index_mode(IndexMode::AllScalars)
    ///     .capacity(1024)
    ///     .build();
    /// ```
    pub fn builder() -> TransientDbBuilder {
        TransientDbBuilder::default()
    }

    /// Inserts a record and returns the store for chaining.
    pub fn insert(&mut self, record: Record) -> &mut Self {
        self.insert_one(record);
        self
    }

    /// Inserts a record and returns its identifier.
    pub fn insert_one(&mut self, record: Record) -> RecordId {
        let record = Arc::new(record);
        let id = self.records.append(Arc::clone(&record));
        let indexed = self.index.index_insert(id, &record);

        tracing::debug!(
            target: "transientdb::store",
            record_id = id,
            indexed_fields = indexed,
            "Inserted record"
        );

        id
    }

    /// Inserts a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord`](transientdb_core::error::TransientDbError::InvalidRecord)
    /// if `value` is not an object.
    pub fn insert_value(&mut self, value: Value) -> TransientDbResult<&mut Self> {
        let record = record_from_value(value)?;
        Ok(self.insert(record))
    }

    /// Serializes `document` and inserts it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not serialize to a JSON object.
    pub fn insert_document<D: Serialize + DeserializeOwned>(&mut self, document: &D) -> TransientDbResult<&mut Self> {
        let record = document.to_record()?;
        Ok(self.insert(record))
    }

    /// Inserts a BSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be represented as JSON.
    #[cfg(feature = "bson")]
    pub fn insert_bson(&mut self, document: &bson::Document) -> TransientDbResult<&mut Self> {
        let record = transientdb_core::document::record_from_bson(document)?;
        Ok(self.insert(record))
    }

    /// Returns the ids of records matching every predicate of `query`, in insertion order.
    pub fn find_ids(&self, query: &Query) -> Vec<RecordId> {
        candidate_ids(&self.index, query)
    }

    /// Returns the records matching every predicate of `query`, in insertion order.
    ///
    /// An empty query returns nothing.
    pub fn find(&self, query: &Query) -> Vec<Arc<Record>> {
        self.find_ids(query)
            .into_iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Like [`find`](Self::find), deserializing each record into `D`.
    ///
    /// # Errors
    ///
    /// Returns an error on the first record that does not deserialize.
    pub fn find_as<D: Serialize + DeserializeOwned>(&self, query: &Query) -> TransientDbResult<Vec<D>> {
        self.find(query)
            .iter()
            .map(|record| D::from_record(record))
            .collect()
    }

    /// Removes every record matching `query` and returns how many were removed.
    ///
    /// An empty query removes nothing.
    pub fn remove_where(&mut self, query: &Query) -> usize {
        let ids = candidate_ids(&self.index, query);
        let mut removed = 0;

        for id in ids {
            let Some(record) = self.records.get(id) else {
                continue;
            };

            self.index.index_remove(id, &record);
            self.records.remove(id);
            removed += 1;
        }

        tracing::debug!(
            target: "transientdb::store",
            predicates = query.len(),
            removed = removed,
            "Removed records"
        );

        removed
    }

    /// Returns the record with the given id, if it is still live.
    pub fn get(&self, id: RecordId) -> Option<Arc<Record>> {
        self.records.get(id)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of identifiers ever assigned, including those of removed records.
    pub fn slot_count(&self) -> usize {
        self.records.slot_count()
    }

    /// Iterates over live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Arc<Record>)> {
        self.records.iter()
    }

    pub fn index_mode(&self) -> IndexMode {
        self.index.mode()
    }

    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }
}

/// Builder for constructing [`TransientDb`] instances.
///
/// # Example
///
/// ```ignore
/// use transientdb::memory::{IndexMode, TransientDb};
///
/// let db = TransientDb::builder()
///     .index_mode(IndexMode::LeadingScalars)
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct TransientDbBuilder {
    index_mode: IndexMode,
    capacity: Option<usize>,
}

impl TransientDbBuilder {
    /// Sets which scalar fields get indexed. Defaults to [`IndexMode::LeadingScalars`].
    pub fn index_mode(mut self, index_mode: IndexMode) -> Self {
        self.index_mode = index_mode;
        self
    }

    /// Pre-sizes record storage for `capacity` inserts.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builds and returns a new, empty [`TransientDb`].
    pub fn build(self) -> TransientDb {
        let records = match self.capacity {
            Some(capacity) => RecordStore::with_capacity(capacity),
            None => RecordStore::new(),
        };

        TransientDb {
            records,
            index: InvertedIndex::new(self.index_mode),
        }
    }
}
