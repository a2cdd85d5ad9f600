//! Explicit adjacency-set forest probed by depth-first search.
//!
//! Each vertex keeps the set of vertices it is joined to by accepted edges.
//! A cycle query walks the forest from one endpoint with an explicit stack
//! and reports whether the other endpoint is reachable. The walk only reads
//! the adjacency sets.

use std::collections::BTreeSet;

use super::CycleCheck;

/// Forest of accepted edges stored as per-vertex neighbour sets.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyForest, CycleCheck};
///
/// let mut forest = AdjacencyForest::with_vertices(3);
/// forest.commit(0, 1);
/// forest.commit(1, 2);
/// assert!(forest.closes_cycle(2, 0));
/// assert_eq!(forest.neighbours(1).count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyForest {
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
    components: usize,
}

impl AdjacencyForest {
    /// Iterates the neighbours of `vertex` in ascending order.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    fn reaches(&self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mut visited = vec![false; self.adjacency.len()];
        let mut stack = vec![from];
        if let Some(seen) = visited.get_mut(from) {
            *seen = true;
        }

        while let Some(vertex) = stack.pop() {
            for neighbour in self.neighbours(vertex) {
                if neighbour == to {
                    return true;
                }
                if let Some(seen) = visited.get_mut(neighbour)
                    && !*seen
                {
                    *seen = true;
                    stack.push(neighbour);
                }
            }
        }
        false
    }
}

impl CycleCheck for AdjacencyForest {
    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
            edge_count: 0,
            components: vertex_count,
        }
    }

    fn closes_cycle(&mut self, a: usize, b: usize) -> bool {
        self.reaches(a, b)
    }

    fn commit(&mut self, a: usize, b: usize) {
        if a >= self.adjacency.len() || b >= self.adjacency.len() || self.reaches(a, b) {
            return;
        }
        for (vertex, neighbour) in [(a, b), (b, a)] {
            if let Some(set) = self.adjacency.get_mut(vertex) {
                set.insert(neighbour);
            }
        }
        self.edge_count = self.edge_count.saturating_add(1);
        self.components = self.components.saturating_sub(1);
    }

    fn components(&self) -> usize {
        self.components
    }
}
