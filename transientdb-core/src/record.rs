//! The record data model.
//!
//! A [`Record`] is an ordered JSON object. Field order is the order in which the
//! caller inserted the fields, and it is observable: indexing walks fields in
//! this order and stops at the first composite value.

use serde_json::{Map, Value};

use crate::error::{TransientDbError, TransientDbResult};

/// One stored document: field name to JSON value, in insertion order.
pub type Record = Map<String, Value>;

/// Stable handle for a stored record.
///
/// Identifiers are assigned from the next free slot at insertion time, strictly
/// increase, and are never reused once the record is removed.
pub type RecordId = usize;

/// Returns `true` for values that cannot be indexed (arrays and objects).
///
/// `null` is a scalar.
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Returns the maximal prefix of `record`'s fields whose values are scalar.
///
/// # Example
///
/// ```ignore
/// let record = json!({ "a": 1, "b": { "nested": true }, "c": 2 });
/// let run: Vec<_> = leading_scalars(record.as_object().unwrap()).map(|(k, _)| k).collect();
/// assert_eq!(run, ["a"]);
/// ```
pub fn leading_scalars(record: &Record) -> impl Iterator<Item = (&String, &Value)> {
    record
        .iter()
        .take_while(|(_, value)| !is_composite(value))
}

/// Every scalar field of `record`, regardless of position.
pub fn all_scalars(record: &Record) -> impl Iterator<Item = (&String, &Value)> {
    record
        .iter()
        .filter(|(_, value)| !is_composite(value))
}

/// Unwraps a JSON value that must be an object into a [`Record`].
///
/// # Errors
///
/// Returns [`TransientDbError::InvalidRecord`] if `value` is not an object.
pub fn record_from_value(value: Value) -> TransientDbResult<Record> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(TransientDbError::InvalidRecord(format!(
            "expected an object, got {}",
            kind_name(&other)
        ))),
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        record_from_value(value).unwrap()
    }

    #[test]
    fn test_leading_scalars_stop_at_first_composite() {
        let record = record(json!({ "a": 1, "b": { "nested": true }, "c": 2 }));
        let run: Vec<&str> = leading_scalars(&record).map(|(k, _)| k.as_str()).collect();

        assert_eq!(run, vec!["a"]);
    }

    #[test]
    fn test_null_does_not_end_leading_run() {
        let record = record(json!({ "a": null, "b": "x", "c": [1, 2], "d": true }));
        let run: Vec<&str> = leading_scalars(&record).map(|(k, _)| k.as_str()).collect();

        assert_eq!(run, vec!["a", "b"]);
    }

    #[test]
    fn test_all_scalars_skip_composites() {
        let record = record(json!({ "a": 1, "b": [], "c": 2, "d": {} }));
        let fields: Vec<&str> = all_scalars(&record).map(|(k, _)| k.as_str()).collect();

        assert_eq!(fields, vec!["a", "c"]);
    }

    #[test]
    fn test_record_from_value_rejects_non_objects() {
        let err = record_from_value(json!([1, 2, 3])).unwrap_err();

        assert!(matches!(err, TransientDbError::InvalidRecord(_)));
        assert!(err.to_string().contains("array"));
    }
}
