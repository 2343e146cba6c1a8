//! Shared test helpers: build small graphs from plain edge lists so
//! individual test functions read as the scenario they're checking,
//! not as graph-construction boilerplate.

use polygraph::graph::Graph;
use polygraph::graph_type::GraphType;
use polygraph::storage::map_of_sets::MapOfSets;

pub type U32Graph = Graph<u32, u32, MapOfSets<u32, u32>>;

/// Build a graph of the given type from `(source, target)` pairs; edge
/// values are assigned `0, 1, 2, ...` in the order given. Vertices are
/// added on demand, mirroring the importer contract in spec.md §6.
#[must_use]
pub fn from_edges(graph_type: GraphType, edges: &[(u32, u32)]) -> U32Graph {
    let mut g = Graph::new(MapOfSets::new(graph_type));
    for &(u, v) in edges {
        g.add_vertex(u).unwrap();
        g.add_vertex(v).unwrap();
    }
    for (i, &(u, v)) in edges.iter().enumerate() {
        g.add_edge_value(i as u32, &u, &v).unwrap();
    }
    g
}

#[must_use]
pub fn undirected_from_edges(edges: &[(u32, u32)]) -> U32Graph {
    from_edges(GraphType::undirected(), edges)
}

/// # Panics
///
/// Panics if any universal graph invariant from spec.md §8 is violated.
pub fn assert_graph_consistency(g: &U32Graph) {
    let vertices: std::collections::HashSet<u32> = g.vertices().into_iter().collect();

    for e in g.edges() {
        let (s, t) = g
            .edge_endpoints(&e)
            .unwrap_or_else(|| panic!("edge {e} has no endpoints"));
        assert!(vertices.contains(&s), "source of edge {e} not in vertex set");
        assert!(vertices.contains(&t), "target of edge {e} not in vertex set");
    }

    for &v in &vertices {
        let incident = g.edges_of(&v).unwrap().iter().unwrap().collect::<Vec<_>>();
        let degree = g.degree_of(&v).unwrap();
        let self_loops = incident
            .iter()
            .filter(|&&e| {
                let (s, t) = g.edge_endpoints(&e).unwrap();
                s == v && t == v
            })
            .count();
        assert_eq!(
            incident.len() as u32 + self_loops as u32,
            degree,
            "degree_of({v}) must equal |edges_of(v)| plus one extra count per self-loop"
        );
    }
}
