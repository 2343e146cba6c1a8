//! C7 — sparse Edmonds blossom maximum-cardinality matching.
//!
//! Works over any [`crate::views::GraphLike`] implementor (the concrete
//! [`crate::graph::Graph`] or any of its views), so it runs unchanged
//! over an [`crate::views::AsUndirected`] wrapper of a directed graph, a
//! [`crate::views::Unmodifiable`] snapshot, and so on.
//!
//! Grounded on the teacher's `src/algo/matching.rs` blossom search,
//! restructured as described in `forest`/`blossom`: arena-indexed `Vec`
//! state instead of `Rc<RefCell<_>>` nodes, and driven over vertex
//! *values* (`V`) rather than `petgraph::graph::NodeIndex`.

mod blossom;
pub(crate) mod forest;

pub mod dual;

use core::hash::Hash;

use indexmap::IndexMap;
use indexmap::IndexSet;

use crate::views::GraphLike;
use forest::BlossomSearch;

/// A maximum-cardinality matching: an undirected pairing of vertices,
/// each appearing on at most one edge of the matching.
#[derive(Debug, Clone, Default)]
pub struct Matching<V>
where
    V: Eq + Hash + Clone,
{
    mate: IndexMap<V, V>,
}

impl<V> Matching<V>
where
    V: Eq + Hash + Clone,
{
    #[must_use]
    pub fn size(&self) -> usize {
        self.mate.len() / 2
    }

    #[must_use]
    pub fn is_matched(&self, v: &V) -> bool {
        self.mate.contains_key(v)
    }

    #[must_use]
    pub fn mate_of(&self, v: &V) -> Option<&V> {
        self.mate.get(v)
    }

    /// Every matched pair, each reported once (as `(u, v)` with `u`
    /// appearing before `v` in [`Matching`]'s internal insertion order).
    pub fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.mate.iter().enumerate().filter_map(move |(i, (u, v))| {
            let j = self.mate.get_index_of(v)?;
            if i < j {
                Some((u.clone(), v.clone()))
            } else {
                None
            }
        })
    }

    /// Hand-construct a matched pair. Used by tests that need a specific
    /// (possibly non-maximum) matching rather than one produced by
    /// [`maximum_matching`].
    #[cfg(test)]
    pub(crate) fn insert_pair(&mut self, u: V, v: V) {
        self.mate.insert(u.clone(), v.clone());
        self.mate.insert(v, u);
    }
}

/// Build a value-index bijection plus an adjacency list with self-loops
/// dropped (an Open Question resolution: the matching engine accepts
/// pseudographs, but a self-loop can never participate in a matching and
/// is filtered from search adjacency rather than rejected).
pub(crate) fn build_adjacency<V, E>(
    graph: &impl GraphLike<V, E>,
) -> (IndexSet<V>, Vec<Vec<usize>>)
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    let index: IndexSet<V> = graph.vertices().into_iter().collect();
    let n = index.len();
    let mut adj = vec![Vec::new(); n];
    for e in graph.edges() {
        if let Some((s, t)) = graph.edge_endpoints(&e) {
            if s == t {
                continue;
            }
            let (Some(si), Some(ti)) = (index.get_index_of(&s), index.get_index_of(&t)) else {
                continue;
            };
            adj[si].push(ti);
            adj[ti].push(si);
        }
    }
    (index, adj)
}

/// Compute a maximum-cardinality matching of `graph` (isolated vertices
/// and self-loops are tolerated: isolated vertices simply end up
/// unmatched, self-loops are ignored).
pub fn maximum_matching<V, E>(graph: &impl GraphLike<V, E>) -> Matching<V>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    let (index, adj) = build_adjacency(graph);
    let n = index.len();
    let mut search = BlossomSearch::new(n, adj);

    // Greedy seed: a cheap initial matching so the blossom search has
    // fewer augmenting paths left to find.
    let mut mate = vec![None; n];
    {
        let adj_ref = &search.adj;
        for v in 0..n {
            if mate[v].is_some() {
                continue;
            }
            for &to in &adj_ref[v] {
                if mate[to].is_none() {
                    mate[v] = Some(to);
                    mate[to] = Some(v);
                    break;
                }
            }
        }
    }
    search.set_mate(mate);

    for root in 0..n {
        if search.mate[root].is_some() {
            continue;
        }
        if let Some(end) = search.find_augmenting_path(root) {
            search.augment(end);
        }
    }

    let mut mate = IndexMap::new();
    for (i, m) in search.mate.iter().enumerate() {
        if let Some(j) = m {
            mate.insert(index[i].clone(), index[*j].clone());
        }
    }
    Matching { mate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Graph, graph_type::GraphType, storage::map_of_sets::MapOfSets};

    fn triangle() -> Graph<u32, u32, MapOfSets<u32, u32>> {
        let mut g = Graph::new(MapOfSets::new(GraphType::undirected()));
        for v in [1, 2, 3] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_value(12, &1, &2).unwrap();
        g.add_edge_value(23, &2, &3).unwrap();
        g.add_edge_value(13, &1, &3).unwrap();
        g
    }

    #[test]
    fn triangle_has_a_matching_of_size_one() {
        let g = triangle();
        let m = maximum_matching(&g);
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn path_of_seven_has_a_perfect_matching_of_three_pairs() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        for v in 0..7 {
            g.add_vertex(v).unwrap();
        }
        for v in 0..6 {
            g.add_edge_value(100 + v, &v, &(v + 1)).unwrap();
        }
        let m = maximum_matching(&g);
        assert_eq!(m.size(), 3);
    }

    #[test]
    fn isolated_vertex_is_unmatched() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_vertex(3).unwrap();
        g.add_edge_value(12, &1, &2).unwrap();
        let m = maximum_matching(&g);
        assert_eq!(m.size(), 1);
        assert!(!m.is_matched(&3));
    }

    #[test]
    fn blossom_is_required_for_this_five_cycle_plus_pendant() {
        // A 5-cycle (needs blossom contraction to match optimally) with
        // a pendant hanging off one vertex.
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        for v in 0..6 {
            g.add_vertex(v).unwrap();
        }
        for v in 0..5u32 {
            g.add_edge_value(v, &v, &((v + 1) % 5)).unwrap();
        }
        g.add_edge_value(100, &0, &5).unwrap();
        let m = maximum_matching(&g);
        // 6 vertices, one necessarily unmatched (5-cycle is odd).
        assert_eq!(m.size(), 3);
    }
}
