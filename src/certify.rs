//! C8 — independent matching certification (spec.md §4.5).
//!
//! `certify` never reuses [`crate::matching::maximum_matching`]'s code
//! path to decide whether a matching is maximum: it checks Berge's
//! theorem directly (a matching is maximum iff the graph has no
//! augmenting path with respect to it) and cross-checks the result
//! against an independently constructed Tutte–Berge dual witness
//! ([`crate::matching::dual`]), so a bug shared between the search that
//! built the matching and the search that certifies it would have to be
//! wrong in the same way twice to slip through undetected.

use core::hash::Hash;

use crate::matching::{
    dual::{odd_set_cover, tutte_berge_holds},
    Matching,
};
use crate::matching::forest::BlossomSearch;
use crate::views::GraphLike;

/// `true` iff `matching` is a maximum-cardinality matching of `graph`.
///
/// Also returns `false` if `matching` isn't even a valid matching of
/// `graph` (an edge that doesn't exist, or a vertex matched twice).
#[must_use]
pub fn certify<V, E>(graph: &impl GraphLike<V, E>, matching: &Matching<V>) -> bool
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    if !is_valid_matching(graph, matching) {
        return false;
    }

    let (index, adj) = crate::matching::build_adjacency(graph);
    let n = index.len();
    let mut mate = vec![None; n];
    for (u, v) in matching.edges() {
        let (Some(ui), Some(vi)) = (index.get_index_of(&u), index.get_index_of(&v)) else {
            return false;
        };
        mate[ui] = Some(vi);
        mate[vi] = Some(ui);
    }

    let mut search = BlossomSearch::new(n, adj);
    search.set_mate(mate.clone());
    for root in 0..n {
        if mate[root].is_none() {
            search.set_mate(mate.clone());
            if search.find_augmenting_path(root).is_some() {
                // Berge's theorem: an augmenting path exists, so
                // `matching` is not maximum.
                return false;
            }
        }
    }

    let cover = odd_set_cover(graph, matching);
    tutte_berge_holds(graph, &cover, matching.size())
}

fn is_valid_matching<V, E>(graph: &impl GraphLike<V, E>, matching: &Matching<V>) -> bool
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    for (u, v) in matching.edges() {
        if u == v {
            return false;
        }
        if graph.get_edge(&u, &v).is_none() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::maximum_matching;
    use crate::{graph::Graph, graph_type::GraphType, storage::map_of_sets::MapOfSets};

    #[test]
    fn certifies_a_true_maximum_matching() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        for v in [1, 2, 3] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_value(12, &1, &2).unwrap();
        g.add_edge_value(23, &2, &3).unwrap();
        g.add_edge_value(13, &1, &3).unwrap();

        let m = maximum_matching(&g);
        assert!(certify(&g, &m));
    }

    #[test]
    fn rejects_a_matching_that_misses_an_available_augmenting_path() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        for v in 0..4u32 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_value(1, &0, &1).unwrap();
        g.add_edge_value(2, &1, &2).unwrap();
        g.add_edge_value(3, &2, &3).unwrap();

        let mut sparse = Matching::default();
        // Hand-construct a non-maximum matching: just {1-2}, leaving the
        // path 0-1-2-3 with an obvious augmenting path through 0 and 3.
        sparse.insert_pair(1u32, 2u32);
        assert!(!certify(&g, &sparse));
    }

    #[test]
    fn rejects_a_matching_edge_that_is_not_in_the_graph() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();

        let mut bogus = Matching::default();
        bogus.insert_pair(1u32, 2u32);
        assert!(!certify(&g, &bogus));
    }
}
