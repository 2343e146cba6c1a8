//! Alternating-forest search state for Edmonds' blossom algorithm.
//!
//! Arena-indexed by `usize` vertex index (never `Rc`/`RefCell`) per
//! spec.md's explicit prohibition on reference-counted graph nodes: the
//! whole search lives in a handful of parallel `Vec`s sized once to the
//! vertex count and reused across every root tried.
//!
//! Grounded on the teacher's `src/algo/matching.rs`
//! (`blossom::weighted_matching`'s label/parent arrays) generalized from
//! a weighted-perfect-matching search to the unweighted maximum-
//! cardinality search spec.md asks for, and restructured around value
//! indices rather than `NodeIndex` so it can run over any
//! [`crate::views::GraphLike`] implementor, not just `petgraph`'s own
//! graph type.
//!
//! `used`/`in_blossom` are [`FixedBitSet`]s rather than `Vec<bool>` —
//! grounded on the teacher's own `visit::VisitMap`/`Dfs` machinery,
//! which backs its visited-set by `fixedbitset::FixedBitSet` for the
//! same reason: a search re-cleared on every root benefits from a
//! bitset's cache density over a byte-per-element `Vec<bool>`.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

/// BFS alternating-forest search over a fixed adjacency list, reused
/// across every root tried by [`super::maximum_matching`] and every
/// exposed vertex probed by [`super::dual`].
pub struct BlossomSearch {
    pub(crate) n: usize,
    pub(crate) adj: Vec<Vec<usize>>,
    pub(crate) mate: Vec<Option<usize>>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) base: Vec<usize>,
    pub(crate) used: FixedBitSet,
    pub(crate) in_blossom: FixedBitSet,
}

impl BlossomSearch {
    pub(crate) fn new(n: usize, adj: Vec<Vec<usize>>) -> Self {
        Self {
            n,
            adj,
            mate: vec![None; n],
            parent: vec![None; n],
            base: (0..n).collect(),
            used: FixedBitSet::with_capacity(n),
            in_blossom: FixedBitSet::with_capacity(n),
        }
    }

    pub(crate) fn set_mate(&mut self, mate: Vec<Option<usize>>) {
        self.mate = mate;
    }

    /// Search for an augmenting path rooted at `root` (must currently be
    /// exposed). Returns the far endpoint of the augmenting path if one
    /// exists; on return, `used`/`base`/`parent` describe the forest
    /// explored (`used[v]` marks an "outer"/even vertex of this
    /// search — exactly the vertices [`super::dual`] needs).
    pub(crate) fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        self.used.clear();
        self.parent.fill(None);
        for i in 0..self.n {
            self.base[i] = i;
        }
        self.used.insert(root);

        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            let neighbors = self.adj[v].clone();
            for to in neighbors {
                if self.base[v] == self.base[to] || self.mate[v] == Some(to) {
                    continue;
                }
                if to == root || (self.mate[to].is_some() && self.parent[self.mate[to].unwrap()].is_some())
                {
                    let lca = self.lca(v, to);
                    self.in_blossom.clear();
                    self.mark_path(v, lca, to);
                    self.mark_path(to, lca, v);
                    for i in 0..self.n {
                        if self.in_blossom.contains(self.base[i]) {
                            self.base[i] = lca;
                            if !self.used.contains(i) {
                                self.used.insert(i);
                                queue.push_back(i);
                            }
                        }
                    }
                } else if self.parent[to].is_none() {
                    self.parent[to] = Some(v);
                    match self.mate[to] {
                        None => return Some(to),
                        Some(m) => {
                            self.used.insert(m);
                            queue.push_back(m);
                        }
                    }
                }
            }
        }
        None
    }

    /// Flip matched/unmatched edges along the augmenting path ending at
    /// `end` (as left by the most recent [`Self::find_augmenting_path`]
    /// call that returned `Some(end)`).
    pub(crate) fn augment(&mut self, end: usize) {
        let mut v = end;
        while let Some(pv) = self.parent[v] {
            let ppv = self.mate[pv];
            self.mate[v] = Some(pv);
            self.mate[pv] = Some(v);
            match ppv {
                Some(next) => v = next,
                None => break,
            }
        }
    }
}
