//! Live, non-materializing vertex/edge/incidence set views (spec.md
//! §4.1's `vertexSet`/`edgeSet`/`edgesOf`/`inEdgesOf`/`outEdgesOf`).
//!
//! Each view stores only a borrow of its owner plus the query it
//! represents; `iter()` re-queries the owner every time rather than
//! caching a snapshot taken at construction, so mutations visible to the
//! owner between two `iter()` calls on the same view are visible here
//! too.

use core::hash::Hash;
use core::marker::PhantomData;

use super::GraphLike;
use crate::error::Result;

/// Live view over every vertex of a [`GraphLike`] owner.
pub struct LiveVertexSet<'a, V, E, G: GraphLike<V, E>>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    owner: &'a G,
    _marker: PhantomData<(V, E)>,
}

impl<'a, V, E, G: GraphLike<V, E>> LiveVertexSet<'a, V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    pub(crate) fn new(owner: &'a G) -> Self {
        Self {
            owner,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owner.vertex_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.owner.contains_vertex(v)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = V> + '_ {
        self.owner.vertices().into_iter()
    }
}

/// Live view over every edge of a [`GraphLike`] owner.
pub struct LiveEdgeSet<'a, V, E, G: GraphLike<V, E>>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    owner: &'a G,
    _marker: PhantomData<(V, E)>,
}

impl<'a, V, E, G: GraphLike<V, E>> LiveEdgeSet<'a, V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    pub(crate) fn new(owner: &'a G) -> Self {
        Self {
            owner,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owner.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, e: &E) -> bool {
        self.owner.contains_edge(e)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        self.owner.edges().into_iter()
    }
}

/// Which incidence a [`LiveIncidenceSet`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidenceKind {
    All,
    In,
    Out,
}

/// Live view over the edges incident to one fixed vertex.
pub struct LiveIncidenceSet<'a, V, E, G: GraphLike<V, E>>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    owner: &'a G,
    vertex: V,
    kind: IncidenceKind,
    _marker: PhantomData<E>,
}

impl<'a, V, E, G: GraphLike<V, E>> LiveIncidenceSet<'a, V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    pub(crate) fn new(owner: &'a G, vertex: V, kind: IncidenceKind) -> Self {
        Self {
            owner,
            vertex,
            kind,
            _marker: PhantomData,
        }
    }

    fn query(&self) -> Result<Vec<E>> {
        match self.kind {
            IncidenceKind::All => self.owner.edges_of(&self.vertex),
            IncidenceKind::In => self.owner.in_edges_of(&self.vertex),
            IncidenceKind::Out => self.owner.out_edges_of(&self.vertex),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.query()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, e: &E) -> Result<bool> {
        Ok(self.query()?.contains(e))
    }

    pub fn iter(&self) -> Result<impl Iterator<Item = E>> {
        Ok(self.query()?.into_iter())
    }
}
