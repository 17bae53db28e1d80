//! In-memory record storage with an inverted equality index.
//!
//! This crate provides [`TransientDb`], a single-table document store that
//! keeps every record in memory and indexes scalar fields as they are inserted.
//!
//! # Features
//!
//! - **Stable identifiers** - Records are addressed by their insertion slot, never reused
//! - **Immutable snapshots** - Stored records are shared as `Arc<Record>` and never mutated
//! - **Automatic indexing** - Scalar fields are indexed on insert, no schema needed
//! - **Equality queries** - Multi-field AND queries answered by index intersection
//!
//! # Quick Start
//!
//! ```ignore
//! use transientdb::{memory::TransientDb, query::Query};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut db = TransientDb::builder().build();
//!
//!     db.insert_value(json!({ "name": "a", "type": "x" }))?
//!         .insert_value(json!({ "name": "b", "type": "x" }))?;
//!
//!     let matches = db.find(&Query::eq("type", "x"));
//!     assert_eq!(matches.len(), 2);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as transientdb_memory;

pub mod engine;
pub mod index;
pub mod records;
pub mod store;

pub use index::{IndexMode, IndexStats, InvertedIndex};
pub use records::RecordStore;
pub use store::{TransientDb, TransientDbBuilder};
