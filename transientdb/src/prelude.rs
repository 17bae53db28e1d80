//! Convenient re-exports of commonly used types from transientdb.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use transientdb::prelude::*;
//! ```

pub use transientdb_core::{
    document::DocumentExt,
    error::{TransientDbError, TransientDbResult},
    key::IndexKey,
    query::{Query, QueryBuilder},
    record::{Record, RecordId},
};
pub use transientdb_memory::{IndexMode, IndexStats, TransientDb, TransientDbBuilder};
