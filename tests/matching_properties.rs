//! Property-based tests for the matching invariants in spec.md §8:
//! validity, optimality (via `certify`), determinism of cardinality
//! under a different vertex-insertion order, and monotonicity under
//! edge addition.
#![cfg(feature = "proptest")]

mod common;

use common::U32Graph;
use polygraph::certify;
use polygraph::graph::Graph;
use polygraph::graph_type::GraphType;
use polygraph::matching::maximum_matching;
use polygraph::storage::map_of_sets::MapOfSets;
use proptest::prelude::*;

fn edge_list_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..10, 0u32..10), 0..24)
}

fn build(edges: &[(u32, u32)]) -> U32Graph {
    let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
        Graph::new(MapOfSets::new(GraphType::undirected()));
    for &(u, v) in edges {
        g.add_vertex(u).unwrap();
        g.add_vertex(v).unwrap();
    }
    for (i, &(u, v)) in edges.iter().enumerate() {
        g.add_edge_value(i as u32, &u, &v).unwrap();
    }
    g
}

proptest! {
    #[test]
    fn matching_is_always_valid_and_certified_maximum(edges in edge_list_strategy()) {
        let g = build(&edges);
        let m = maximum_matching(&g);

        let mut touched = std::collections::HashSet::new();
        for (u, v) in m.edges() {
            prop_assert_ne!(u, v);
            prop_assert!(touched.insert(u), "vertex matched twice");
            prop_assert!(touched.insert(v), "vertex matched twice");
        }

        prop_assert!(certify(&g, &m));
    }

    #[test]
    fn cardinality_is_independent_of_vertex_insertion_order(edges in edge_list_strategy()) {
        let forward = build(&edges);
        let reversed_edges: Vec<(u32, u32)> = edges.iter().rev().copied().collect();
        let backward = build(&reversed_edges);

        let m1 = maximum_matching(&forward);
        let m2 = maximum_matching(&backward);
        prop_assert_eq!(m1.size(), m2.size());
    }

    #[test]
    fn adding_an_edge_never_decreases_matching_cardinality(
        edges in edge_list_strategy(),
        extra in (0u32..10, 0u32..10),
    ) {
        let base = build(&edges);
        let before = maximum_matching(&base).size();

        let mut extended = base;
        extended.add_vertex(extra.0).unwrap();
        extended.add_vertex(extra.1).unwrap();
        let _ = extended.add_edge_value(u32::MAX, &extra.0, &extra.1);

        let after = maximum_matching(&extended).size();
        prop_assert!(after >= before);
    }
}
