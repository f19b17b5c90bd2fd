#![cfg(test)]

// Property tests for LookupTable kept inside the crate so they can compare
// each bucket's chain, in order, against the model.

use crate::table::LookupTable;
use proptest::prelude::*;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, String),
    Get(usize),
    Probe(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z0-9]{0,6}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), "[a-z]{0,4}").prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            "[a-z0-9]{0,6}".prop_map(OpI::Probe),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Reference behavior: an append-only list scanned front to back.
fn model_find<'a>(model: &'a [(String, String)], key: &str) -> Option<&'a str> {
    model
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn run(capacity: usize, pool: Vec<String>, ops: Vec<OpI>) -> Result<(), TestCaseError> {
    let mut sut = LookupTable::new(capacity).expect("positive capacity");
    let mut model: Vec<(String, String)> = Vec::new();

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = pool[i].clone();
                sut.set(k.clone(), v.clone());
                model.push((k, v));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.find(k), model_find(&model, k));
                prop_assert_eq!(sut.get(k), model_find(&model, k).unwrap_or("").to_string());
            }
            OpI::Probe(k) => {
                prop_assert_eq!(sut.find(&k), model_find(&model, &k));
                prop_assert_eq!(sut.get(&k), model_find(&model, &k).unwrap_or("").to_string());
            }
        }

        // Post-conditions after each op
        // 1) Entry count parity, duplicates included
        prop_assert_eq!(sut.len(), model.len());
        // 2) Each bucket chains exactly the model entries addressed to it,
        //    in insertion order
        for b in 0..capacity {
            let chain: Vec<(&str, &str)> = sut.bucket(b).expect("index in range").entries().collect();
            let expected: Vec<(&str, &str)> = model
                .iter()
                .filter(|(k, _)| sut.address(k) == b)
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            prop_assert_eq!(sut.chain_len(b), expected.len());
            prop_assert_eq!(chain, expected);
        }
    }
    Ok(())
}

// Property: State-machine equivalence against an append-only list.
// Invariants exercised across random operation sequences:
// - `get`/`find` return the first value written for a key.
// - Absent keys read back as `None` / `""`.
// - Every entry sits in the bucket its key addresses; nothing is removed.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(capacity in 1usize..=32, (pool, ops) in arb_scenario()) {
        run(capacity, pool, ops)?;
    }
}

// Property: Same invariants with a single bucket, so every key collides and
// resolution relies on key equality along one chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_bucket((pool, ops) in arb_scenario()) {
        run(1, pool, ops)?;
    }
}

proptest! {
    // Property: addresses are deterministic and always within `[0, capacity)`.
    #[test]
    fn prop_address_in_range(capacity in 1usize..=4096, key in "\\PC{0,24}") {
        let t = LookupTable::new(capacity).unwrap();
        let a = t.address(&key);
        prop_assert!(a < capacity);
        prop_assert_eq!(a, t.address(&key));
    }
}
