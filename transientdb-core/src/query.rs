//! Query construction for equality lookups.
//!
//! A [`Query`] is an ordered set of `field == value` predicates that must all
//! hold for a record to match. There are no other operators: no ranges, no
//! negation, no disjunction.
//!
//! # Query Building
//!
//! Queries can be constructed using the fluent builder API:
//!
//! ```ignore
//! use transientdb::query::Query;
//!
//! let query = Query::builder()
//!     .eq("type", "x")
//!     .eq("owner", 42)
//!     .build();
//! ```
//!
//! or from an existing JSON object:
//!
//! ```ignore
//! let query = Query::try_from(json!({ "type": "x", "owner": 42 }))?;
//! ```
//!
//! Predicates are evaluated in the order they were added. The first predicate
//! seeds the candidate set, so putting the most selective field first is
//! cheaper, but the result does not depend on the order.

use serde_json::{Map, Value};

use crate::{
    error::{TransientDbError, TransientDbResult},
    record::{Record, kind_name},
};

/// A conjunction of equality predicates over top-level record fields.
///
/// Adding a field that is already present replaces its value and keeps its
/// original position.
///
/// An empty query matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    predicates: Map<String, Value>,
}

impl Query {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query { predicates: Map::new() }
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Shorthand for a single-predicate query.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Query::builder().eq(field, value).build()
    }

    /// Builds a query matching every top-level field of `record`.
    ///
    /// Composite fields are carried over as-is and will never match, so this is
    /// mostly useful with records made only of scalars.
    pub fn from_record(record: &Record) -> Self {
        Query { predicates: record.clone() }
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterates over `(field, value)` predicates in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.predicates
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }
}

impl From<Record> for Query {
    fn from(predicates: Record) -> Self {
        Query { predicates }
    }
}

impl TryFrom<Value> for Query {
    type Error = TransientDbError;

    fn try_from(value: Value) -> TransientDbResult<Self> {
        match value {
            Value::Object(predicates) => Ok(Query { predicates }),
            other => Err(TransientDbError::InvalidQuery(format!(
                "expected an object, got {}",
                kind_name(&other)
            ))),
        }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Adds an equality predicate.
    ///
    /// # Arguments
    ///
    /// * `field` - The top-level field name to compare
    /// * `value` - The scalar value the field must equal
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .predicates
            .insert(field.into(), value.into());
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}
