//! `AsUndirected` structural view (spec.md §4.1 `asUndirectedGraph`).
//!
//! Presents a directed graph as if every edge were undirected: `edges_of`
//! / `in_edges_of` / `out_edges_of` all return the full incidence set,
//! and [`GraphLike::get_edge`] tries both endpoint orders.

use core::hash::Hash;

use super::GraphLike;
use crate::{error::Result, graph::Graph, graph_type::GraphType, storage::GraphStorage};

pub struct AsUndirected<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    inner: &'a Graph<V, E, S>,
}

impl<'a, V, E, S> AsUndirected<'a, V, E, S>
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

impl<'a, V, E, S> GraphLike<V, E> for AsUndirected<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.inner.graph_type().as_undirected()
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
        self.inner.edges_of_values(v)
    }

    fn out_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.edges_of_values(v)
    }

    fn edge_endpoints(&self, e: &E) -> Option<(V, V)> {
        self.inner.edge_endpoints(e)
    }

    fn edge_weight(&self, e: &E) -> Option<f64> {
        self.inner.edge_weight_raw(e)
    }

    fn get_edge(&self, u: &V, v: &V) -> Option<E> {
        self.inner
            .get_edge(u, v)
            .or_else(|| self.inner.get_edge(v, u))
    }

    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E> {
        let mut edges = self.inner.get_all_edges(u, v);
        if u != v {
            edges.extend(self.inner.get_all_edges(v, u));
        }
        edges
    }
}
