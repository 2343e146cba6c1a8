//! C5 — 64-bit iterables facade.
//!
//! JGraphT's `GraphIterables` exists because `vertexSet().size()` boxes
//! every element into a `Set` before you can ask its size, and the count
//! itself is an `int`, capping a huge streaming graph at 2^31 vertices.
//! `Iterables` here is the same idea: counts as `u64`, and incidence
//! queries available as an iterator without going through the `Vec`
//! [`crate::storage::GraphStorage`] happens to materialize internally
//! (the storage trait returns `Vec` for simplicity; this facade is the
//! seam a future streaming backend would slot under without changing
//! callers).

use core::hash::Hash;

use crate::{error::Result, graph::Graph, storage::GraphStorage};

/// 64-bit counting facade over a [`Graph`].
pub struct Iterables<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    graph: &'a Graph<V, E, S>,
}

impl<'a, V, E, S> Iterables<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    #[must_use]
    pub fn new(graph: &'a Graph<V, E, S>) -> Self {
        Self { graph }
    }

    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.graph.vertex_count() as u64
    }

    #[must_use]
    pub fn edge_count(&self) -> u64 {
        self.graph.edge_count() as u64
    }

    #[must_use]
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.graph.vertices().into_iter()
    }

    #[must_use]
    pub fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.graph.edges().into_iter()
    }

    pub fn edges_of(&self, v: &V) -> Result<impl Iterator<Item = E>> {
        Ok(self.graph.edges_of(v)?.iter()?.collect::<Vec<_>>().into_iter())
    }

    pub fn degree_of(&self, v: &V) -> Result<u64> {
        Ok(u64::from(self.graph.degree_of(v)?))
    }

    pub fn in_degree_of(&self, v: &V) -> Result<u64> {
        Ok(u64::from(self.graph.in_degree_of(v)?))
    }

    pub fn out_degree_of(&self, v: &V) -> Result<u64> {
        Ok(u64::from(self.graph.out_degree_of(v)?))
    }
}

impl<V, E, S> Graph<V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    #[must_use]
    pub fn iterables(&self) -> Iterables<'_, V, E, S> {
        Iterables::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph_type::GraphType, storage::map_of_sets::MapOfSets};

    #[test]
    fn counts_are_u64() {
        let mut g: Graph<u32, u32, MapOfSets<u32, u32>> =
            Graph::new(MapOfSets::new(GraphType::undirected()));
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_edge_value(10, &1, &2).unwrap();

        let it = g.iterables();
        assert_eq!(it.vertex_count(), 2);
        assert_eq!(it.edge_count(), 1);
        assert_eq!(it.degree_of(&1).unwrap(), 1);
    }
}
