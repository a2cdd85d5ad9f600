//! Builder utilities for configuring [`Kruskal`] runs.
//!
//! Exposes the cycle-check strategy selection surface used before
//! constructing [`Kruskal`] instances.

use crate::pipeline::Kruskal;

/// Selects how the MST builder decides whether a candidate edge closes a
/// cycle.
///
/// Both strategies accept the same edges in the same order; they differ only
/// in cost. `DisjointSet` answers each query in near-constant time, while
/// `AdjacencyWalk` searches the accepted forest depth-first.
///
/// # Examples
/// ```
/// use kruskal_core::CycleCheckStrategy;
///
/// assert_eq!(CycleCheckStrategy::default(), CycleCheckStrategy::DisjointSet);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CycleCheckStrategy {
    /// Union-find with union by rank and path compression.
    #[default]
    DisjointSet,
    /// Depth-first search over explicit per-vertex adjacency sets.
    AdjacencyWalk,
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{CycleCheckStrategy, KruskalBuilder};
///
/// let kruskal = KruskalBuilder::new()
///     .with_cycle_check(CycleCheckStrategy::AdjacencyWalk)
///     .build();
/// assert_eq!(kruskal.cycle_check(), CycleCheckStrategy::AdjacencyWalk);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KruskalBuilder {
    cycle_check: CycleCheckStrategy,
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cycle-check strategy.
    #[must_use]
    pub const fn with_cycle_check(mut self, strategy: CycleCheckStrategy) -> Self {
        self.cycle_check = strategy;
        self
    }

    /// Returns the configured cycle-check strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cycle_check(&self) -> CycleCheckStrategy { self.cycle_check }

    /// Builds a [`Kruskal`] runner from the current configuration.
    #[must_use]
    pub const fn build(self) -> Kruskal {
        Kruskal::new(self.cycle_check)
    }
}
