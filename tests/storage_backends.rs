//! The graph facade (C4) is deliberately generic over its storage
//! backend (C3); these tests exercise the same sequence of operations
//! against each concrete backend and check they agree, the way spec.md
//! §9's "one data-bearing graph value parametrized by ... a plugged-in
//! specifics backend" is meant to be used.

use polygraph::graph::Graph;
use polygraph::graph_type::GraphType;
use polygraph::storage::csr::CsrBuilder;
use polygraph::storage::fast_lookup::FastLookup;
use polygraph::storage::map_of_sets::MapOfSets;

#[test]
fn map_of_sets_and_fast_lookup_agree_on_reads() {
    let edges = [(1u32, 2u32), (2, 3), (1, 3), (3, 4)];

    let mut a: Graph<u32, u32, MapOfSets<u32, u32>> =
        Graph::new(MapOfSets::new(GraphType::undirected()));
    let mut b: Graph<u32, u32, FastLookup<u32, u32>> =
        Graph::new(FastLookup::new(GraphType::undirected()));

    for &(u, v) in &edges {
        a.add_vertex(u).unwrap();
        a.add_vertex(v).unwrap();
        b.add_vertex(u).unwrap();
        b.add_vertex(v).unwrap();
    }
    for (i, &(u, v)) in edges.iter().enumerate() {
        assert_eq!(
            a.add_edge_value(i as u32, &u, &v).unwrap(),
            b.add_edge_value(i as u32, &u, &v).unwrap()
        );
    }

    assert_eq!(a.vertex_count(), b.vertex_count());
    assert_eq!(a.edge_count(), b.edge_count());
    for &(u, v) in &edges {
        assert_eq!(a.get_edge(&u, &v).is_some(), b.get_edge(&u, &v).is_some());
        assert_eq!(a.degree_of(&u).unwrap(), b.degree_of(&u).unwrap());
    }
}

#[test]
fn csr_storage_is_built_once_and_rejects_mutation() {
    let csr = CsrBuilder::new(GraphType::directed())
        .with_vertices([1u32, 2, 3])
        .with_edge(10u32, 1, 2, 1.0)
        .with_edge(11, 2, 3, 1.0)
        .build()
        .unwrap();
    let g: Graph<u32, u32, _> = Graph::new(csr);

    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.get_edge(&1, &2), Some(10));
    assert_eq!(g.out_degree_of(&1).unwrap(), 1);
    assert_eq!(g.in_degree_of(&1).unwrap(), 0);

    let mut g = g;
    assert!(g.add_vertex(4).is_err());
    assert!(g.add_edge_value(99, &1, &3).is_err());
}

#[test]
fn weighted_graph_round_trips_non_default_weights_across_backends() {
    let mut a: Graph<u32, u32, MapOfSets<u32, u32>> =
        Graph::new(MapOfSets::new(GraphType::undirected().as_weighted()));
    a.add_vertex(1).unwrap();
    a.add_vertex(2).unwrap();
    a.add_weighted_edge_value(10, &1, &2, 4.5).unwrap();
    assert_eq!(a.get_edge_weight(&10).unwrap(), 4.5);

    a.set_edge_weight(&10, 7.0).unwrap();
    assert_eq!(a.get_edge_weight(&10).unwrap(), 7.0);
}
