//! Gallai–Edmonds dual witness for [`crate::certify::certify`].
//!
//! Computes the Gallai–Edmonds decomposition `(D, A, C)` of a graph with
//! respect to a matching: `D` is every vertex missed by *some* maximum
//! matching, `A = N(D) \ D`, and `C` is everything else. By the
//! Gallai–Edmonds structure theorem, `A` is a Tutte–Berge witness set —
//! removing it splits the graph into components each contributing
//! exactly one unit of deficiency (the odd ones) or none (the even
//! ones), and `odd_components(G - A) - |A|` equals the graph's
//! deficiency `n - 2 * matching.size()` exactly when the matching is
//! maximum.
//!
//! Grounded on the teacher's `src/algo/matching.rs`
//! `validate_matching`-style post-hoc check, generalized from "re-run
//! the same search and compare sizes" to an independent Tutte–Berge
//! certificate so certification doesn't just trust the same code path
//! that produced the matching.

use core::hash::Hash;

use indexmap::IndexSet;

use super::{build_adjacency, forest::BlossomSearch, Matching};
use crate::views::GraphLike;

/// A Tutte–Berge witness set: removing `deficiency_set` from the graph
/// splits it into components whose odd count minus `|deficiency_set|`
/// equals the graph's matching deficiency.
#[derive(Debug, Clone)]
pub struct OddSetCover<V>
where
    V: Eq + Hash + Clone,
{
    pub deficiency_set: Vec<V>,
}

/// Build the Gallai–Edmonds `A` set with respect to `matching`.
#[must_use]
pub fn odd_set_cover<V, E>(graph: &impl GraphLike<V, E>, matching: &Matching<V>) -> OddSetCover<V>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    let (index, adj) = build_adjacency(graph);
    let n = index.len();
    let mut mate = vec![None; n];
    for (u, v) in matching.edges() {
        if let (Some(ui), Some(vi)) = (index.get_index_of(&u), index.get_index_of(&v)) {
            mate[ui] = Some(vi);
            mate[vi] = Some(ui);
        }
    }

    let mut search = BlossomSearch::new(n, adj.clone());
    search.set_mate(mate.clone());

    let mut in_d = vec![false; n];
    for root in 0..n {
        if mate[root].is_some() {
            continue;
        }
        search.set_mate(mate.clone());
        search.find_augmenting_path(root);
        for v in search.used.ones() {
            in_d[v] = true;
        }
    }

    let mut in_a = vec![false; n];
    for v in 0..n {
        if in_d[v] {
            continue;
        }
        if adj[v].iter().any(|&w| in_d[w]) {
            in_a[v] = true;
        }
    }

    let deficiency_set = (0..n)
        .filter(|&v| in_a[v])
        .map(|v| index[v].clone())
        .collect();
    OddSetCover { deficiency_set }
}

/// `true` iff removing `cover.deficiency_set` from `graph` splits it
/// into components whose odd count minus `|cover.deficiency_set|`
/// equals `matching_size`'s deficiency (`n - 2 * matching_size`) —
/// i.e. `cover` is a valid Tutte–Berge witness certifying that no larger
/// matching exists.
#[must_use]
pub fn tutte_berge_holds<V, E>(
    graph: &impl GraphLike<V, E>,
    cover: &OddSetCover<V>,
    matching_size: usize,
) -> bool
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    let (index, adj) = build_adjacency(graph);
    let n = index.len();
    let removed: IndexSet<usize> = cover
        .deficiency_set
        .iter()
        .filter_map(|v| index.get_index_of(v))
        .collect();

    let mut visited = vec![false; n];
    let mut odd_components = 0usize;
    for start in 0..n {
        if visited[start] || removed.contains(&start) {
            continue;
        }
        let mut stack = vec![start];
        visited[start] = true;
        let mut size = 0usize;
        while let Some(v) = stack.pop() {
            size += 1;
            for &to in &adj[v] {
                if !removed.contains(&to) && !visited[to] {
                    visited[to] = true;
                    stack.push(to);
                }
            }
        }
        if size % 2 == 1 {
            odd_components += 1;
        }
    }

    let deficiency = n as isize - 2 * matching_size as isize;
    odd_components as isize - removed.len() as isize == deficiency
}
