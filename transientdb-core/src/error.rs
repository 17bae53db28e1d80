//! Error types and result types for record store operations.
//!
//! The store's own operations are total: unknown fields, empty queries and stale
//! identifiers all produce empty results. Errors only arise at the API boundary,
//! when a value has to be converted into a record or a query.
//! Use [`TransientDbResult<T>`] as the return type for those fallible conversions.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when handing values to the store.
#[derive(Error, Debug)]
pub enum TransientDbError {
    /// Serialization/deserialization error when converting between typed documents and records.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A value passed in as a record is not a key/value object.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// A value passed in as a query is not a key/value object.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// A specialized `Result` type for record conversions.
pub type TransientDbResult<T> = Result<T, TransientDbError>;

impl From<SerdeJsonError> for TransientDbError {
    fn from(err: SerdeJsonError) -> Self {
        TransientDbError::Serialization(err.to_string())
    }
}
