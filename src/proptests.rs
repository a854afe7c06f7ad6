use std::collections::HashMap;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use crate::clock::{Clock, ManualClock};
use crate::tree::Tree;

#[derive(Clone, Debug)]
enum Op {
    Insert { key: Vec<u8>, value: u32 },
    InsertWithExpiry { key: Vec<u8>, value: u32, ttl_ms: u64 },
    Find { key: Vec<u8> },
    Remove { key: Vec<u8> },
    Advance { ms: u64 },
}

// A small alphabet and short keys so that operations keep colliding on shared prefixes.
fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![0u8, b'a', b'b', 255]), 0..4)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| Op::Insert { key, value }),
        (key_strategy(), any::<u32>(), 0u64..50).prop_map(|(key, value, ttl_ms)| {
            Op::InsertWithExpiry { key, value, ttl_ms }
        }),
        key_strategy().prop_map(|key| Op::Find { key }),
        key_strategy().prop_map(|key| Op::Remove { key }),
        (0u64..30).prop_map(|ms| Op::Advance { ms }),
    ]
}

proptest! {
    #[test]
    fn matches_reference_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let clock = ManualClock::new();
        let mut tree = Tree::with_clock(clock.clone());
        let mut model: HashMap<Vec<u8>, (u32, Option<Instant>)> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert { key, value } => {
                    let expected = model.insert(key.clone(), (value, None)).map(|(v, _)| v);
                    prop_assert_eq!(tree.insert(&key, value), expected);
                }
                Op::InsertWithExpiry { key, value, ttl_ms } => {
                    let deadline = clock.now() + Duration::from_millis(ttl_ms);
                    let expected = model.insert(key.clone(), (value, Some(deadline))).map(|(v, _)| v);
                    prop_assert_eq!(
                        tree.insert_with_expiry(&key, value, Duration::from_millis(ttl_ms)),
                        expected
                    );
                }
                Op::Find { key } => {
                    let now = clock.now();
                    let expected = model.get(&key).and_then(|(v, deadline)| match deadline {
                        Some(deadline) if now >= *deadline => None,
                        _ => Some(*v),
                    });
                    prop_assert_eq!(tree.find(&key).copied(), expected);
                }
                Op::Remove { key } => {
                    let expected = model.remove(&key).map(|(v, _)| v);
                    prop_assert_eq!(tree.remove(&key), expected);
                }
                Op::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        let stats = tree.stats();
        prop_assert_eq!(stats.num_values, model.len());
        prop_assert_eq!(stats.num_live_values + stats.num_expired_values, model.len());
    }
}
