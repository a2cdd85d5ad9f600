//! Union-find (disjoint set union) with union by rank and path compression.

use super::CycleCheck;

/// Disjoint-set forest keyed by vertex index.
///
/// # Examples
/// ```
/// use kruskal_core::{CycleCheck, DisjointSet};
///
/// let mut forest = DisjointSet::with_vertices(3);
/// forest.commit(0, 1);
/// assert!(forest.closes_cycle(1, 0));
/// assert!(!forest.closes_cycle(1, 2));
/// assert_eq!(forest.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Returns the representative of the set containing `node`.
    ///
    /// Out-of-range nodes are their own representative.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        while let Some(slot) = self.parent.get_mut(node) {
            let parent = *slot;
            if parent == root {
                break;
            }
            *slot = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when they already share a representative.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank_of(left);
        let right_rank = self.rank_of(right);
        if left_rank < right_rank || (left_rank == right_rank && right < left) {
            std::mem::swap(&mut left, &mut right);
        }
        let (Some(child), true) = (self.parent.get_mut(right), left < self.rank.len()) else {
            return false;
        };
        *child = left;
        if left_rank == right_rank
            && let Some(rank) = self.rank.get_mut(left)
        {
            *rank = rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    fn rank_of(&self, node: usize) -> u8 {
        self.rank.get(node).copied().unwrap_or(0)
    }
}

impl CycleCheck for DisjointSet {
    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    fn closes_cycle(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn commit(&mut self, a: usize, b: usize) {
        self.union(a, b);
    }

    fn components(&self) -> usize {
        self.components
    }
}
