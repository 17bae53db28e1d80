use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::{Value, json};
use transientdb::{
    prelude::*,
    record::{all_scalars, leading_scalars},
};

const FIELDS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(FIELDS[0].to_string()),
        Just(FIELDS[1].to_string()),
        Just(FIELDS[2].to_string()),
        Just(FIELDS[3].to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0i64..3).prop_map(Value::from),
        (0i64..3).prop_map(|n| Value::from(n.to_string())),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => arb_scalar(),
        1 => prop::collection::vec(arb_scalar(), 0..3).prop_map(Value::Array),
        1 => arb_scalar().prop_map(|value| json!({ "nested": value })),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::vec((arb_field(), arb_value()), 0..5)
        .prop_map(|fields| fields.into_iter().collect::<Record>())
}

fn arb_query() -> impl Strategy<Value = Query> {
    prop::collection::vec((arb_field(), arb_scalar()), 0..3)
        .prop_map(|predicates| Query::from(predicates.into_iter().collect::<Record>()))
}

fn arb_mode() -> impl Strategy<Value = IndexMode> {
    prop_oneof![Just(IndexMode::LeadingScalars), Just(IndexMode::AllScalars)]
}

fn build(mode: IndexMode, records: &[Record]) -> TransientDb {
    let mut db = TransientDb::builder().index_mode(mode).build();
    for record in records {
        db.insert(record.clone());
    }
    db
}

/// Reference answer computed by scanning every live record.
fn scan(db: &TransientDb, query: &Query) -> Vec<RecordId> {
    if query.is_empty() {
        return Vec::new();
    }

    db.iter()
        .filter(|(_, record)| {
            query.iter().all(|(field, expected)| {
                let mut indexed: Box<dyn Iterator<Item = (&String, &Value)> + '_> = match db.index_mode() {
                    IndexMode::LeadingScalars => Box::new(leading_scalars(record)),
                    IndexMode::AllScalars => Box::new(all_scalars(record)),
                };

                match (indexed.find(|(name, _)| name.as_str() == field), IndexKey::from_value(expected)) {
                    (Some((_, stored)), Some(key)) => IndexKey::from_value(stored) == Some(key),
                    _ => false,
                }
            })
        })
        .map(|(id, _)| id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn find_matches_full_scan(
        mode in arb_mode(),
        records in prop::collection::vec(arb_record(), 0..24),
        query in arb_query(),
    ) {
        let db = build(mode, &records);

        prop_assert_eq!(db.find_ids(&query), scan(&db, &query));
    }

    #[test]
    fn two_field_query_is_intersection(
        records in prop::collection::vec(arb_record(), 0..24),
        (first, first_value) in (arb_field(), arb_scalar()),
        (second, second_value) in (arb_field(), arb_scalar()),
    ) {
        prop_assume!(first != second);
        let db = build(IndexMode::LeadingScalars, &records);

        let left: BTreeSet<RecordId> = db.find_ids(&Query::eq(first.clone(), first_value.clone())).into_iter().collect();
        let right: BTreeSet<RecordId> = db.find_ids(&Query::eq(second.clone(), second_value.clone())).into_iter().collect();
        let both = Query::builder()
            .eq(first, first_value)
            .eq(second, second_value)
            .build();

        let expected: Vec<RecordId> = left.intersection(&right).copied().collect();
        prop_assert_eq!(db.find_ids(&both), expected);
    }

    #[test]
    fn inserted_record_is_found_by_its_scalar_run(
        records in prop::collection::vec(arb_record(), 0..16),
        probe in arb_record(),
    ) {
        let mut db = build(IndexMode::LeadingScalars, &records);
        let id = db.insert_one(probe.clone());

        let query = Query::from(
            leading_scalars(&probe)
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect::<Record>(),
        );
        prop_assume!(!query.is_empty());

        let found = db.find_ids(&query);
        prop_assert_eq!(found.iter().filter(|found| **found == id).count(), 1);
    }

    #[test]
    fn removed_records_stay_gone(
        mode in arb_mode(),
        records in prop::collection::vec(arb_record(), 1..24),
        query in arb_query(),
    ) {
        let mut db = build(mode, &records);
        let slots = db.slot_count();
        let doomed = db.find_ids(&query);

        prop_assert_eq!(db.remove_where(&query), doomed.len());
        prop_assert_eq!(db.len(), records.len() - doomed.len());
        prop_assert!(db.find_ids(&query).is_empty());

        for id in &doomed {
            prop_assert!(db.get(*id).is_none());

            for (field, value) in all_scalars(&records[*id]) {
                prop_assert!(!db.find_ids(&Query::eq(field.clone(), value.clone())).contains(id));
            }
        }

        let next = db.insert_one(Record::new());
        prop_assert_eq!(next, slots);
    }

    #[test]
    fn empty_query_never_matches(records in prop::collection::vec(arb_record(), 0..16)) {
        let mut db = build(IndexMode::AllScalars, &records);

        prop_assert!(db.find(&Query::new()).is_empty());
        prop_assert_eq!(db.remove_where(&Query::new()), 0);
        prop_assert_eq!(db.len(), records.len());
    }
}
