//! C6 — live collection views and read-only/structural wrappers.
//!
//! Every view here borrows its source rather than snapshotting it, so a
//! view reflects mutations made through the owner after the view was
//! created — Rust's borrow checker enforces the single-writer discipline
//! spec.md asks for structurally: a `&mut Graph` cannot coexist with a
//! live view borrowing `&Graph`, so "don't mutate while a view is live"
//! is a compile error rather than a runtime contract.
//!
//! Grounded on the teacher's `Reversed`/`UnGraph::from_edges` style
//! adapter structs (`crates/core/src/visit` wrappers that re-delegate
//! `NodeCount`/`EdgeCount`/neighbor iteration to an inner graph).

use core::hash::Hash;

use crate::{error::Result, graph_type::GraphType};

pub mod live_set;
pub mod reversed;
pub mod undirected;
pub mod unmodifiable;

pub use live_set::{IncidenceKind, LiveEdgeSet, LiveIncidenceSet, LiveVertexSet};
pub use reversed::EdgeReversed;
pub use undirected::AsUndirected;
pub use unmodifiable::Unmodifiable;

/// Shared read contract implemented by [`crate::graph::Graph`] and every
/// view wrapper in this module, so algorithms ([`crate::matching`],
/// [`crate::certify`]) and the views themselves are written once against
/// `impl GraphLike<V, E>` rather than against the concrete [`crate::graph::Graph`].
pub trait GraphLike<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn graph_type(&self) -> GraphType;
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn contains_vertex(&self, v: &V) -> bool;
    fn contains_edge(&self, e: &E) -> bool;
    fn vertices(&self) -> Vec<V>;
    fn edges(&self) -> Vec<E>;
    fn edges_of(&self, v: &V) -> Result<Vec<E>>;
    fn in_edges_of(&self, v: &V) -> Result<Vec<E>>;
    fn out_edges_of(&self, v: &V) -> Result<Vec<E>>;
    fn edge_endpoints(&self, e: &E) -> Option<(V, V)>;
    fn edge_weight(&self, e: &E) -> Option<f64>;
    fn get_edge(&self, u: &V, v: &V) -> Option<E>;
    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E>;
}
