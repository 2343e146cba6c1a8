//! C3 — storage specifics.
//!
//! Internal adjacency representation, selectable per graph instance. The
//! [`GraphStorage`] trait is the contract [`crate::graph::Graph`] (C4)
//! dispatches every read/write to; grounded on `petgraph-core`'s
//! `storage::GraphStorage` trait (`insert_node`/`insert_edge`/
//! `remove_node`/`remove_edge`/`node_connections`/`edges_between`), but
//! keyed by the vertex/edge *value* itself rather than by a
//! graph-managed integer id — spec.md's C1 identity contract is pure
//! value equality, so the storage layer must be addressable by value.
//!
//! Three interchangeable backends are provided: [`map_of_sets::MapOfSets`]
//! (general mutable, O(deg) lookup), [`fast_lookup::FastLookup`] (adds an
//! endpoint-pair index for O(1) expected lookup), and [`csr::Csr`]
//! (immutable compressed sparse row, built once).

pub mod csr;
pub mod fast_lookup;
pub mod map_of_sets;

use core::hash::Hash;

use crate::{error::Result, graph_type::GraphType};

/// Pluggable internal adjacency storage for a [`crate::graph::Graph`].
///
/// Every method operates on vertex/edge *values*; implementors are free
/// to choose whatever internal indexing scheme they like as long as
/// value-equality identity is preserved.
pub trait GraphStorage<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    /// The descriptor this storage was constructed for; fixed for the
    /// lifetime of the storage.
    fn graph_type(&self) -> GraphType;

    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, v: &V) -> bool;
    fn contains_edge(&self, e: &E) -> bool;

    /// Insert `v` if absent. Returns `true` iff newly inserted.
    fn insert_vertex(&mut self, v: V) -> Result<bool>;

    /// Remove `v` and every edge incident to it. Returns `true` iff `v`
    /// was present.
    fn remove_vertex(&mut self, v: &V) -> Result<bool>;

    /// Insert an edge `e` between `source` and `target` with the given
    /// weight. The caller (C4) has already enforced self-loop/parallel-edge
    /// type rules and endpoint presence; this only returns `true` iff `e`
    /// was newly inserted (an already-present `e` is a caller bug, not a
    /// storage-level concern).
    fn insert_edge(&mut self, e: E, source: V, target: V, weight: f64) -> Result<bool>;

    /// Remove `e`. Returns its `(source, target, weight)` if it was
    /// present.
    fn remove_edge(&mut self, e: &E) -> Result<Option<(V, V, f64)>>;

    fn edge_endpoints(&self, e: &E) -> Option<(V, V)>;
    fn edge_weight(&self, e: &E) -> Option<f64>;
    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()>;

    /// Any one edge between `u` and `v` (in that order for directed
    /// graphs), or `None` if there is none.
    fn get_edge(&self, u: &V, v: &V) -> Option<E>;

    /// Every edge between `u` and `v`.
    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E>;

    /// All vertices, in the storage's chosen iteration order.
    fn vertices(&self) -> Vec<V>;

    /// All edges, in the storage's chosen iteration order.
    fn edges(&self) -> Vec<E>;

    /// Every edge incident to `v` (both directions for a directed graph,
    /// counted once each even for a self-loop).
    fn edges_of(&self, v: &V) -> Vec<E>;

    /// Edges directed into `v`. For an undirected graph this is the same
    /// as [`GraphStorage::edges_of`].
    fn in_edges_of(&self, v: &V) -> Vec<E>;

    /// Edges directed out of `v`. For an undirected graph this is the
    /// same as [`GraphStorage::edges_of`].
    fn out_edges_of(&self, v: &V) -> Vec<E>;

    /// `true` iff this storage can be mutated (CSR storage is always
    /// `false`).
    fn is_mutable(&self) -> bool {
        true
    }
}

/// Give each vertex's adjacency a small-dense (`Vec`-backed) or
/// large-sparse (hash-backed) representation.
///
/// This is a cost hint only — spec.md §4.2's "Edge-set factory hook" —
/// and never changes observable semantics, only the asymptotic cost of
/// `edges_of`/`get_edge` for that vertex. [`map_of_sets::MapOfSets`] and
/// [`fast_lookup::FastLookup`] (which wraps the former) both still use
/// `indexmap::IndexSet` as the concrete collection regardless of this
/// hint; what it does change is the initial capacity reserved per vertex
/// when it's first inserted, to avoid early reallocation on a vertex
/// expected to end up with many incident edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexSetStrategy {
    /// Expect a small number of incident edges per vertex.
    #[default]
    Dense,
    /// Expect a large, sparse number of incident edges per vertex.
    Sparse,
}

/// Construction-time configuration shared by the mutable storage
/// backends, mirroring `petgraph_core::storage::GraphStorage::
/// with_capacity(node_capacity, edge_capacity)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageConfig {
    pub vertex_set_strategy: VertexSetStrategy,
    pub initial_vertex_capacity: usize,
    pub initial_edge_capacity: usize,
}
