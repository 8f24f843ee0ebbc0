//! Property-based tests for the bookmark collection's merge operations.
//!
//! The two arrival paths (direct call results and feed events) may deliver
//! any interleaving, with redundant deliveries. These tests verify that the
//! collection's invariants hold for arbitrary operation sequences and that
//! redundant delivery never changes the outcome.

use proptest::prelude::*;

use shelfmark::managers::collection::BookmarkCollection;
use shelfmark::types::bookmark::Bookmark;
use shelfmark::types::event::ChangeEvent;

fn record(id: &str, created_at: i64) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        user_id: "ada".to_string(),
        title: format!("Bookmark {}", id),
        url: format!("https://{}.example.com", id),
        created_at,
    }
}

/// Operations drawn from a small id pool so collisions actually happen.
#[derive(Debug, Clone)]
enum Op {
    Insert(String, i64),
    Delete(String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-e]", 0i64..50).prop_map(|(id, ts)| Op::Insert(id, ts)),
        "[a-e]".prop_map(Op::Delete),
    ]
}

fn to_event(op: &Op) -> ChangeEvent {
    match op {
        Op::Insert(id, ts) => ChangeEvent::Inserted(record(id, *ts)),
        Op::Delete(id) => ChangeEvent::Deleted { id: id.clone() },
    }
}

fn apply_all(ops: &[Op]) -> BookmarkCollection {
    let mut collection = BookmarkCollection::new();
    for op in ops {
        collection.apply(to_event(op));
    }
    collection
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // **Property: no duplicates, always sorted**
    //
    // For any operation sequence, the collection holds at most one record
    // per id and lists records in non-increasing creation-time order.
    #[test]
    fn invariants_hold_for_any_op_sequence(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let collection = apply_all(&ops);
        let records = collection.records();

        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                prop_assert_ne!(&a.id, &b.id, "duplicate id in collection");
            }
        }
        for pair in records.windows(2) {
            prop_assert!(
                pair[0].created_at >= pair[1].created_at,
                "records out of order: {} before {}",
                pair[0].created_at,
                pair[1].created_at
            );
        }
    }

    // **Property: insert is idempotent**
    //
    // Insert(r, Insert(r, S)) == Insert(r, S) for any reachable state S.
    #[test]
    fn insert_is_idempotent(
        ops in proptest::collection::vec(arb_op(), 0..30),
        id in "[a-e]",
        ts in 0i64..50,
    ) {
        let mut once = apply_all(&ops);
        once.insert(record(&id, ts));

        let mut twice = once.clone();
        twice.insert(record(&id, ts));

        prop_assert_eq!(once.records(), twice.records());
    }

    // **Property: delete is idempotent**
    //
    // Delete(id, Delete(id, S)) == Delete(id, S) for any reachable state S.
    #[test]
    fn delete_is_idempotent(
        ops in proptest::collection::vec(arb_op(), 0..30),
        id in "[a-e]",
    ) {
        let mut once = apply_all(&ops);
        once.remove(&id);

        let mut twice = once.clone();
        twice.remove(&id);

        prop_assert_eq!(once.records(), twice.records());
    }

    // **Property: redundant delivery converges**
    //
    // Delivering every event twice (the second arrival path echoing the
    // first) produces the same final collection as delivering each once.
    #[test]
    fn double_delivery_matches_single_delivery(
        ops in proptest::collection::vec(arb_op(), 0..30),
    ) {
        let single = apply_all(&ops);

        let mut double = BookmarkCollection::new();
        for op in &ops {
            double.apply(to_event(op));
            double.apply(to_event(op));
        }

        prop_assert_eq!(single.records(), double.records());
    }
}
