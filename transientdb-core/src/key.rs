//! Tagged index keys for scalar values.
//!
//! JSON values cannot be used directly as hash map keys (floats are not `Eq`),
//! and comparing them through a lossy common form would make `1` and `"1"`
//! collide. [`IndexKey`] keeps the type tag next to the content so that two
//! values only share an index entry when they have the same type and the same
//! content.

use serde_json::{Number, Value};

/// Hashable, type-tagged representation of a scalar JSON value.
///
/// Numbers are keyed by numeric identity rather than by JSON spelling: `1`,
/// `1.0` and `-0.0`/`0` all produce the same key. Integral numbers within the
/// combined `i64`/`u64` range become [`IndexKey::Integer`]; everything else keys
/// by its `f64` bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexKey {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integral number.
    Integer(i128),
    /// Non-integral (or out of integer range) number, as `f64` bits.
    Float(u64),
    /// String value.
    String(String),
}

impl IndexKey {
    /// Builds the key for a scalar value.
    ///
    /// Returns `None` for arrays and objects, which are never indexed and
    /// therefore never match anything.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(IndexKey::Null),
            Value::Bool(value) => Some(IndexKey::Bool(*value)),
            Value::Number(number) => Some(Self::from_number(number)),
            Value::String(value) => Some(IndexKey::String(value.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_number(number: &Number) -> Self {
        if let Some(value) = number.as_i64() {
            return IndexKey::Integer(i128::from(value));
        }

        if let Some(value) = number.as_u64() {
            return IndexKey::Integer(i128::from(value));
        }

        // serde_json never stores NaN or infinities
        let value = number.as_f64().unwrap_or_default();

        // [-2^63, 2^64) holds every i64 and u64
        if value.fract() == 0.0 && (-9_223_372_036_854_775_808.0..18_446_744_073_709_551_616.0).contains(&value) {
            IndexKey::Integer(value as i128)
        } else {
            IndexKey::Float(value.to_bits())
        }
    }
}
