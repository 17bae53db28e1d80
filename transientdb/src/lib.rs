//! A tiny in-process document store with automatic equality indexing.
//!
//! This crate is the primary entry point for users of transientdb. It
//! re-exports the core types and the in-memory store.
//!
//! # Features
//!
//! - **Schemaless records** - Insert any JSON object, or any serde type that serializes to one
//! - **Automatic indexing** - Scalar fields are indexed on insert
//! - **Equality queries** - `find` and `remove_where` take a conjunction of `field == value` predicates
//! - **Stable identifiers** - Every record keeps its insertion slot for life
//!
//! # Quick Start
//!
//! ```ignore
//! use transientdb::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> TransientDbResult<()> {
//!     let mut db = TransientDb::new();
//!
//!     db.insert_value(json!({ "name": "a", "type": "x" }))?
//!         .insert_value(json!({ "name": "b", "type": "x" }))?
//!         .insert_value(json!({ "name": "c", "type": "y" }))?;
//!
//!     // [{ "name": "a", "type": "x" }, { "name": "b", "type": "x" }]
//!     let xs = db.find(&Query::eq("type", "x"));
//!
//!     db.remove_where(&Query::eq("name", "b"));
//!
//!     // [{ "name": "a", "type": "x" }]
//!     let xs = db.find(&Query::eq("type", "x"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Indexing
//!
//! Fields are indexed in the order they appear in the record, up to the first
//! array or object. Anything after that is stored but cannot be queried:
//!
//! ```ignore
//! db.insert_value(json!({ "a": 1, "b": { "nested": true }, "c": 2 }))?;
//!
//! assert_eq!(db.find(&Query::eq("a", 1)).len(), 1);
//! assert!(db.find(&Query::eq("c", 2)).is_empty());
//! ```
//!
//! Use [`IndexMode::AllScalars`](memory::IndexMode::AllScalars) to index every
//! scalar field regardless of position:
//!
//! ```ignore
//! let mut db = TransientDb::builder()
//!     .index_mode(IndexMode::AllScalars)
//!     .build();
//! ```
//!
//! # Typed documents
//!
//! ```ignore
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Task {
//!     title: String,
//!     status: String,
//! }
//!
//! db.insert_document(&Task { title: "write".into(), status: "open".into() })?;
//! let open: Vec<Task> = db.find_as(&Query::eq("status", "open"))?;
//! ```
//!
//! # Logging
//!
//! Inserts and removals are logged through `tracing` under the
//! `transientdb::store` target at `debug` level, and index maintenance under
//! `transientdb::index` at `trace` level. No subscriber is installed.

pub mod prelude;

pub use transientdb_core::{document, error, key, query, record};

/// In-memory store implementation.
pub mod memory {
    pub use transientdb_memory::{
        IndexMode, IndexStats, InvertedIndex, RecordStore, TransientDb, TransientDbBuilder, engine,
    };
}

// Re-export JSON types for convenience
pub use serde_json;

#[cfg(feature = "bson")]
pub use bson;
