//! Conversions between typed documents and records.
//!
//! Any serde type that serializes to a JSON object can be stored. Struct fields
//! become record fields in declaration order, which matters: only the leading
//! run of scalar fields is indexed by default, so declare the fields you want to
//! query before any nested structs, vectors or maps.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::{
    error::TransientDbResult,
    record::{Record, record_from_value},
};

/// Extension trait providing record conversions for serde types.
///
/// This trait is automatically implemented for every type that is both
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```ignore
/// use transientdb::document::DocumentExt;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// pub struct User {
///     pub name: String,
///     pub role: String,
/// }
///
/// let record = User { name: "a".into(), role: "x".into() }.to_record()?;
/// let user = User::from_record(&record)?;
/// ```
pub trait DocumentExt: Sized {
    /// Converts this document to a record for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the document does not
    /// serialize to a JSON object.
    fn to_record(&self) -> TransientDbResult<Record>;

    /// Creates a document from a stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_record(record: &Record) -> TransientDbResult<Self>;
}

impl<D: Serialize + DeserializeOwned> DocumentExt for D {
    fn to_record(&self) -> TransientDbResult<Record> {
        record_from_value(to_value(self)?)
    }

    fn from_record(record: &Record) -> TransientDbResult<Self> {
        Ok(from_value(Value::Object(record.clone()))?)
    }
}

/// Converts a BSON document into a record.
///
/// Types JSON can express natively (strings, booleans, doubles, 32/64-bit
/// integers, null, arrays, subdocuments) map onto their JSON counterparts.
/// BSON-only types such as object ids and datetimes serialize to their extended
/// JSON objects, which makes them composite and therefore not indexable.
///
/// # Errors
///
/// Returns an error if the document cannot be represented as JSON.
#[cfg(feature = "bson")]
pub fn record_from_bson(document: &bson::Document) -> TransientDbResult<Record> {
    record_from_value(to_value(document)?)
}
