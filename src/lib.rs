//! A graph library in the JGraphT mold: value-identity vertices and
//! edges, a pluggable storage backend per graph instance, live
//! (non-snapshotting) collection views, and a sparse Edmonds blossom
//! maximum-cardinality matching engine with an independent dual
//! certifier.
//!
//! Start with [`graph::Graph`] — pick a [`graph_type::GraphType`]
//! (`directed()`, `undirected()`, or one of the pseudograph variants)
//! and a storage backend from [`storage`], and build up a graph through
//! `add_vertex`/`add_edge_value`. [`matching::maximum_matching`] computes
//! a maximum matching over any [`views::GraphLike`] implementor —
//! [`graph::Graph`] itself or any of its [`views`] wrappers — and
//! [`certify::certify`] checks one independently of how it was produced.

pub mod certify;
pub mod error;
pub mod graph;
pub mod graph_type;
pub mod identity;
pub mod iterables;
pub mod matching;
pub mod storage;
pub mod views;

pub use certify::certify;
pub use error::{Error, Result};
pub use graph::Graph;
pub use graph_type::GraphType;
pub use identity::{Counter, Supplier};
pub use matching::{maximum_matching, Matching};
pub use views::GraphLike;
