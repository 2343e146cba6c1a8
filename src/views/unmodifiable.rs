//! Read-only wrapper (spec.md §4.1 `asUnmodifiableGraph`).
//!
//! Every read delegates to the wrapped graph; every would-be mutator
//! returns [`crate::error::Error::Unsupported`] instead of being
//! reachable at all, matching `java.util.Collections.unmodifiableX` more
//! than a type-level "no such method" — callers that only know about
//! [`GraphLike`] never see a mutator in the first place, but callers
//! holding an `Unmodifiable` directly still get a clean error rather than
//! a missing method.

use core::hash::Hash;

use error_stack::Report;

use super::GraphLike;
use crate::{
    error::{Error, Result},
    graph::Graph,
    graph_type::GraphType,
    storage::GraphStorage,
};

pub struct Unmodifiable<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    inner: &'a Graph<V, E, S>,
}

impl<'a, V, E, S> Unmodifiable<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    #[must_use]
    pub fn new(inner: &'a Graph<V, E, S>) -> Self {
        Self { inner }
    }

    pub fn add_vertex(&mut self, _v: V) -> Result<bool> {
        Err(Report::new(Error::unsupported("Unmodifiable::add_vertex")))
    }

    pub fn remove_vertex(&mut self, _v: &V) -> Result<bool> {
        Err(Report::new(Error::unsupported("Unmodifiable::remove_vertex")))
    }

    pub fn add_edge_value(&mut self, _e: E, _source: &V, _target: &V) -> Result<bool> {
        Err(Report::new(Error::unsupported("Unmodifiable::add_edge_value")))
    }

    pub fn remove_edge(&mut self, _e: &E) -> Result<bool> {
        Err(Report::new(Error::unsupported("Unmodifiable::remove_edge")))
    }

    pub fn set_edge_weight(&mut self, _e: &E, _weight: f64) -> Result<()> {
        Err(Report::new(Error::unsupported("Unmodifiable::set_edge_weight")))
    }
}

impl<'a, V, E, S> GraphLike<V, E> for Unmodifiable<'a, V, E, S>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    S: GraphStorage<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.inner.graph_type().as_unmodifiable()
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
        self.inner.in_edges_of_values(v)
    }

    fn out_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.out_edges_of_values(v)
    }

    fn edge_endpoints(&self, e: &E) -> Option<(V, V)> {
        self.inner.edge_endpoints(e)
    }

    fn edge_weight(&self, e: &E) -> Option<f64> {
        self.inner.edge_weight_raw(e)
    }

    fn get_edge(&self, u: &V, v: &V) -> Option<E> {
        self.inner.get_edge(u, v)
    }

    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E> {
        self.inner.get_all_edges(u, v)
    }
}
