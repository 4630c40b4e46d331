//! # Property-Based Tests
//!
//! Index and set invariants of the triple store.

use deduct_core::model::{Literal, Node, Triple};
use deduct_core::store::TripleStore;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;

fn node(i: u8) -> Node {
    Node::iri(&format!("http://example.org/n{i}"))
}

fn triple() -> impl Strategy<Value = Triple> {
    let object = prop_oneof![
        (0u8..6).prop_map(node),
        (0u8..3).prop_map(|i| Node::blank(&format!("b{i}"))),
        "[a-z]{0,3}".prop_map(|s| Node::Literal(Literal::new_simple(s))),
    ];
    (0u8..6, 0u8..3, object).prop_map(|(s, p, o)| Triple::new(node(s), node(p), o))
}

proptest! {
    /// The store is a set that keeps first-insertion order.
    #[test]
    fn store_is_an_ordered_set(triples in vec(triple(), 0..40)) {
        let mut store = TripleStore::new();
        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        for triple in &triples {
            let fresh = seen.insert(triple.clone());
            prop_assert_eq!(store.add(triple.clone()), fresh);
            if fresh {
                expected.push(triple.clone());
            }
        }
        prop_assert_eq!(store.len(), expected.len());
        prop_assert_eq!(store.all(), expected.as_slice());
    }

    /// Pattern lookups agree with a linear scan.
    #[test]
    fn lookups_match_scan(triples in vec(triple(), 0..40), s in 0u8..6, p in 0u8..3) {
        let store: TripleStore = triples.into_iter().collect();
        let (s, p) = (node(s), node(p));

        let by_index: Vec<&Node> = store.objects(&s, &p).collect();
        let by_scan: Vec<&Node> = store
            .iter()
            .filter(|t| t.subject == s && t.predicate == p)
            .map(|t| &t.object)
            .collect();
        prop_assert_eq!(by_index, by_scan);

        let pattern = store.triples(None, Some(&p), None);
        prop_assert!(pattern.iter().all(|t| t.predicate == p));
        prop_assert_eq!(pattern.len(), store.iter().filter(|t| t.predicate == p).count());
    }

    /// Rewriting with the identity keeps the store unchanged.
    #[test]
    fn identity_rewrite(triples in vec(triple(), 0..40)) {
        let mut store: TripleStore = triples.into_iter().collect();
        let before = store.all().to_vec();
        store.rewrite(Some);
        prop_assert_eq!(store.all(), before.as_slice());
    }
}
