//! Multi-predicate equality intersection.

use transientdb_core::{query::Query, record::RecordId};

use crate::index::InvertedIndex;

/// Returns the ids of live records matching every predicate of `query`.
///
/// The first predicate seeds the candidate set; each following predicate can
/// only remove candidates. An empty query matches nothing. Ids come back in
/// ascending order, which is insertion order.
pub fn candidate_ids(index: &InvertedIndex, query: &Query) -> Vec<RecordId> {
    let mut predicates = query.iter();

    let Some((field, value)) = predicates.next() else {
        return Vec::new();
    };

    let mut candidates = index.lookup(field, value);

    for (field, value) in predicates {
        if candidates.is_empty() {
            break;
        }

        match index.entry(field, value) {
            Some(ids) => candidates.retain(|id| ids.contains(id)),
            None => candidates.clear(),
        }
    }

    candidates.into_iter().collect()
}
