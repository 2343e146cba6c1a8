//! C3(c) — compressed sparse row (CSR) storage.
//!
//! Immutable once built: every mutating [`GraphStorage`] method returns
//! [`crate::error::Error::Unsupported`]. Built once from a stream of
//! `(edge, source, target, weight)` triples with a known vertex
//! universe, giving O(1) `edge_endpoints` and O(1) degree via
//! `row_ptr[v + 1] - row_ptr[v]` (exposed here as
//! [`Csr::out_row_span`]/[`Csr::in_row_span`]).
//!
//! Grounded on the teacher's pre-refactor `src/csr.rs` (row-pointer +
//! column-index compressed adjacency for a graph whose node/edge count
//! is known up front).

use core::hash::Hash;

use error_stack::Report;
use indexmap::IndexSet;

use super::GraphStorage;
use crate::{error::Error, error::Result, graph_type::GraphType};

/// One edge as fed to [`CsrBuilder`].
pub struct CsrEdge<V, E> {
    pub edge: E,
    pub source: V,
    pub target: V,
    pub weight: f64,
}

/// Builds an immutable [`Csr`] from a known vertex universe and a stream
/// of edges.
pub struct CsrBuilder<V, E> {
    vertices: Vec<V>,
    edges: Vec<CsrEdge<V, E>>,
    graph_type: GraphType,
}

impl<V, E> CsrBuilder<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    #[must_use]
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            graph_type,
        }
    }

    #[must_use]
    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    #[must_use]
    pub fn with_edge(mut self, edge: E, source: V, target: V, weight: f64) -> Self {
        self.edges.push(CsrEdge {
            edge,
            source,
            target,
            weight,
        });
        self
    }

    pub fn build(self) -> Result<Csr<V, E>> {
        Csr::from_parts(self.graph_type, self.vertices, self.edges)
    }
}

/// Immutable compressed-sparse-row graph storage (C3(c)).
pub struct Csr<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    graph_type: GraphType,
    vertex_index: IndexSet<V>,
    edge_index: IndexSet<E>,
    edge_source: Vec<usize>,
    edge_target: Vec<usize>,
    edge_weight: Vec<f64>,
    /// For directed graphs: outgoing incidence. For undirected graphs:
    /// full incidence (self-loops appear twice, once per pass, to make
    /// `out_row_span` equal to degree directly).
    out_row_ptr: Vec<usize>,
    out_col: Vec<(usize, usize)>,
    /// For directed graphs: incoming incidence. Unused for undirected
    /// graphs (mirrors `out_row_ptr`/`out_col` there).
    in_row_ptr: Vec<usize>,
    in_col: Vec<(usize, usize)>,
}

impl<V, E> Csr<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn from_parts(
        graph_type: GraphType,
        vertices: Vec<V>,
        edges: Vec<CsrEdge<V, E>>,
    ) -> Result<Self> {
        let vertex_index: IndexSet<V> = vertices.into_iter().collect();
        let n = vertex_index.len();
        let mut edge_index = IndexSet::with_capacity(edges.len());
        let mut edge_source = Vec::with_capacity(edges.len());
        let mut edge_target = Vec::with_capacity(edges.len());
        let mut edge_weight = Vec::with_capacity(edges.len());

        let mut out_buckets: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        let mut in_buckets: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        let directed = graph_type.is_directed();

        for e in edges {
            let Some(s) = vertex_index.get_index_of(&e.source) else {
                return Err(Report::new(Error::illegal_arg(
                    "edge source not present in the CSR vertex universe",
                )));
            };
            let Some(t) = vertex_index.get_index_of(&e.target) else {
                return Err(Report::new(Error::illegal_arg(
                    "edge target not present in the CSR vertex universe",
                )));
            };
            if !edge_index.insert(e.edge) {
                return Err(Report::new(Error::illegal_arg(
                    "duplicate edge value passed to CSR builder",
                )));
            }
            let edge_idx = edge_index.len() - 1;
            edge_source.push(s);
            edge_target.push(t);
            edge_weight.push(e.weight);

            if directed {
                out_buckets[s].push((edge_idx, t));
                in_buckets[t].push((edge_idx, s));
            } else {
                out_buckets[s].push((edge_idx, t));
                if s != t {
                    out_buckets[t].push((edge_idx, s));
                } else {
                    // self-loop on an undirected graph: counted twice for
                    // degree purposes, per spec.
                    out_buckets[s].push((edge_idx, t));
                }
            }
        }

        let (out_row_ptr, out_col) = flatten(&out_buckets);
        let (in_row_ptr, in_col) = if directed {
            flatten(&in_buckets)
        } else {
            (out_row_ptr.clone(), out_col.clone())
        };

        Ok(Self {
            graph_type,
            vertex_index,
            edge_index,
            edge_source,
            edge_target,
            edge_weight,
            out_row_ptr,
            out_col,
            in_row_ptr,
            in_col,
        })
    }

    /// Row length for `v`'s outgoing (directed) or full (undirected)
    /// incidence — `row_ptr[v + 1] - row_ptr[v]`, equal to degree.
    #[must_use]
    pub fn out_row_span(&self, v: &V) -> Option<usize> {
        let i = self.vertex_index.get_index_of(v)?;
        Some(self.out_row_ptr[i + 1] - self.out_row_ptr[i])
    }

    /// Row length for `v`'s incoming incidence (directed graphs only;
    /// equal to [`Csr::out_row_span`] for undirected graphs).
    #[must_use]
    pub fn in_row_span(&self, v: &V) -> Option<usize> {
        let i = self.vertex_index.get_index_of(v)?;
        Some(self.in_row_ptr[i + 1] - self.in_row_ptr[i])
    }

    fn out_row(&self, v: &V) -> &[(usize, usize)] {
        let Some(i) = self.vertex_index.get_index_of(v) else {
            return &[];
        };
        &self.out_col[self.out_row_ptr[i]..self.out_row_ptr[i + 1]]
    }

    fn in_row(&self, v: &V) -> &[(usize, usize)] {
        let Some(i) = self.vertex_index.get_index_of(v) else {
            return &[];
        };
        &self.in_col[self.in_row_ptr[i]..self.in_row_ptr[i + 1]]
    }
}

fn flatten(buckets: &[Vec<(usize, usize)>]) -> (Vec<usize>, Vec<(usize, usize)>) {
    let mut row_ptr = Vec::with_capacity(buckets.len() + 1);
    let mut col = Vec::new();
    row_ptr.push(0);
    for bucket in buckets {
        col.extend_from_slice(bucket);
        row_ptr.push(col.len());
    }
    (row_ptr, col)
}

impl<V, E> GraphStorage<V, E> for Csr<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn vertex_count(&self) -> usize {
        self.vertex_index.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertex_index.contains(v)
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edge_index.contains(e)
    }

    fn insert_vertex(&mut self, _v: V) -> Result<bool> {
        Err(Report::new(Error::unsupported("Csr::insert_vertex")))
    }

    fn remove_vertex(&mut self, _v: &V) -> Result<bool> {
        Err(Report::new(Error::unsupported("Csr::remove_vertex")))
    }

    fn insert_edge(&mut self, _e: E, _source: V, _target: V, _weight: f64) -> Result<bool> {
        Err(Report::new(Error::unsupported("Csr::insert_edge")))
    }

    fn remove_edge(&mut self, _e: &E) -> Result<Option<(V, V, f64)>> {
        Err(Report::new(Error::unsupported("Csr::remove_edge")))
    }

    fn edge_endpoints(&self, e: &E) -> Option<(V, V)> {
        let i = self.edge_index.get_index_of(e)?;
        Some((
            self.vertex_index[self.edge_source[i]].clone(),
            self.vertex_index[self.edge_target[i]].clone(),
        ))
    }

    fn edge_weight(&self, e: &E) -> Option<f64> {
        let i = self.edge_index.get_index_of(e)?;
        Some(self.edge_weight[i])
    }

    fn set_edge_weight(&mut self, _e: &E, _weight: f64) -> Result<()> {
        Err(Report::new(Error::unsupported("Csr::set_edge_weight")))
    }

    fn get_edge(&self, u: &V, v: &V) -> Option<E> {
        let Some(v_idx) = self.vertex_index.get_index_of(v) else {
            return None;
        };
        self.out_row(u)
            .iter()
            .find(|(_, nbr)| *nbr == v_idx)
            .map(|(edge_idx, _)| self.edge_index[*edge_idx].clone())
    }

    fn get_all_edges(&self, u: &V, v: &V) -> Vec<E> {
        let Some(v_idx) = self.vertex_index.get_index_of(v) else {
            return Vec::new();
        };
        let mut seen: IndexSet<usize> = IndexSet::new();
        self.out_row(u)
            .iter()
            .filter(|(_, nbr)| *nbr == v_idx)
            .filter(|(edge_idx, _)| seen.insert(*edge_idx))
            .map(|(edge_idx, _)| self.edge_index[*edge_idx].clone())
            .collect()
    }

    fn vertices(&self) -> Vec<V> {
        self.vertex_index.iter().cloned().collect()
    }

    fn edges(&self) -> Vec<E> {
        self.edge_index.iter().cloned().collect()
    }

    fn edges_of(&self, v: &V) -> Vec<E> {
        let mut seen: IndexSet<usize> = IndexSet::new();
        for (edge_idx, _) in self.out_row(v) {
            seen.insert(*edge_idx);
        }
        if self.graph_type.is_directed() {
            for (edge_idx, _) in self.in_row(v) {
                seen.insert(*edge_idx);
            }
        }
        seen.into_iter().map(|i| self.edge_index[i].clone()).collect()
    }

    fn in_edges_of(&self, v: &V) -> Vec<E> {
        if !self.graph_type.is_directed() {
            return self.edges_of(v);
        }
        self.in_row(v)
            .iter()
            .map(|(edge_idx, _)| self.edge_index[*edge_idx].clone())
            .collect()
    }

    fn out_edges_of(&self, v: &V) -> Vec<E> {
        if !self.graph_type.is_directed() {
            return self.edges_of(v);
        }
        self.out_row(v)
            .iter()
            .map(|(edge_idx, _)| self.edge_index[*edge_idx].clone())
            .collect()
    }

    fn is_mutable(&self) -> bool {
        false
    }
}
