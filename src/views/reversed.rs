//! `EdgeReversed` structural view (spec.md §4.1 `edgeReversedGraph`).
//!
//! Every directed edge appears with its endpoints swapped: `in_edges_of`
//! and `out_edges_of` trade places, and [`GraphLike::get_edge`] looks up
//! `(v, u)` in the underlying graph for a query of `(u, v)` here.

use core::hash::Hash;

use super::GraphLike;
use crate::{error::Result, graph::Graph, graph_type::GraphType, storage::GraphStorage};

pub struct EdgeReversed<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    inner: &'a Graph<V, E, S>,
}

impl<'a, V, E, S> EdgeReversed<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    #[must_use]
    pub fn new(inner: &'a Graph<V, E, S>) -> Self {
        Self { inner }
    }
}

impl<'a, V, E, S> GraphLike<V, E> for EdgeReversed<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.inner.graph_type()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.inner.contains_vertex(v)
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.inner.contains_edge(e)
    }

    fn vertices(&self) -> Vec<V> {
        self.inner.vertices()
    }

    fn edges(&self) -> Vec<E> {
        self.inner.edges()
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.edges_of_values(v)
    }

    fn in_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.out_edges_of_values(v)
    }

    fn out_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.in_edges_of_values(v)
    }

    fn edge_endpoints(&self, e: &E) -> Option<(V, V)> {
        self.inner.edge_endpoints(e).map(|(s, t)| (t, s))
    }

    fn edge_weight(&self, e: &E) -> Option<f64> {
        self.inner.edge_weight_raw(e)
    }

    fn get_edge(&self, u: &V, v: &V) -> Option<E> {
        self.inner.get_edge(v, u)
    }

    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E> {
        self.inner.get_all_edges(v, u)
    }
}
