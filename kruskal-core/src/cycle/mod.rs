//! Cycle detection over the forest of accepted edges.
//!
//! Kruskal's algorithm asks one question per candidate edge: would adding
//! `(a, b)` to the edges accepted so far close a cycle? Both strategies here
//! answer it without altering the forest; only [`CycleCheck::commit`] changes
//! state.

mod adjacency;
mod disjoint_set;

pub use self::{adjacency::AdjacencyForest, disjoint_set::DisjointSet};

/// Tracks the accepted-edge forest and answers cycle queries against it.
pub trait CycleCheck {
    /// Creates an empty forest over `vertex_count` isolated vertices.
    fn with_vertices(vertex_count: usize) -> Self
    where
        Self: Sized;

    /// Returns `true` when `a` and `b` are already joined by accepted edges,
    /// so adding `(a, b)` would close a cycle.
    ///
    /// Implementations may reorganise internal bookkeeping (for example path
    /// compression) but must not change which vertices are joined.
    fn closes_cycle(&mut self, a: usize, b: usize) -> bool;

    /// Adds the accepted edge `(a, b)` to the forest.
    fn commit(&mut self, a: usize, b: usize);

    /// Returns the number of trees in the forest, isolated vertices included.
    fn components(&self) -> usize;
}
