//! Canonical undirected edge set derived from an adjacency matrix.
//!
//! Edges are stored as `(weight, lower, higher)` and ordered lexicographically
//! by that tuple, which is the deterministic tie-break used by the MST
//! builder.

use std::cmp::Ordering;
use std::collections::{BTreeSet, btree_set};

use crate::error::{KruskalError, Result};
use crate::matrix::{AdjacencyMatrix, Weight};

/// A single undirected weighted edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    weight: Weight,
    source: usize,
    target: usize,
}

impl WeightedEdge {
    /// Canonicalises `(weight, a, b)` so the smaller endpoint comes first.
    ///
    /// Returns `None` for self-loops.
    #[must_use]
    pub fn new(weight: Weight, a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self {
                weight,
                source: a,
                target: b,
            }),
            Ordering::Greater => Some(Self {
                weight,
                source: b,
                target: a,
            }),
            Ordering::Equal => None,
        }
    }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered set of undirected edges over a fixed vertex range.
///
/// Each unordered vertex pair appears at most once. Iteration yields edges in
/// ascending `(weight, source, target)` order.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, EdgeSet};
///
/// let matrix = AdjacencyMatrix::from_edges(3, [(2, 0, 1), (1, 1, 2)])?;
/// let edges = EdgeSet::from_matrix(&matrix);
/// let order: Vec<_> = edges.iter().map(|e| (e.source(), e.target())).collect();
/// assert_eq!(order, vec![(1, 2), (0, 1)]);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeSet {
    vertex_count: usize,
    edges: BTreeSet<WeightedEdge>,
    // Canonical `(source, target)` pairs of `edges`.
    pairs: BTreeSet<(usize, usize)>,
}

impl EdgeSet {
    /// Creates an empty edge set over `vertex_count` vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: BTreeSet::new(),
            pairs: BTreeSet::new(),
        }
    }

    /// Collects one edge per unordered pair with a non-zero entry.
    ///
    /// When `(i, j)` and `(j, i)` disagree, the entry met first in row-major
    /// order wins: the upper-triangle weight when it is non-zero, otherwise
    /// the lower-triangle one. Diagonal entries are ignored.
    #[must_use]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let vertex_count = matrix.vertex_count();
        let mut set = Self::new(vertex_count);
        for row in 0..vertex_count {
            for column in row.saturating_add(1)..vertex_count {
                let upper = matrix.weight(row, column).unwrap_or(0);
                let weight = if upper != 0 {
                    upper
                } else {
                    matrix.weight(column, row).unwrap_or(0)
                };
                if weight == 0 {
                    continue;
                }
                set.push_new(WeightedEdge {
                    weight,
                    source: row,
                    target: column,
                });
            }
        }
        set
    }

    /// Inserts an edge unless its vertex pair is already present.
    ///
    /// Returns `Ok(true)` when the edge was added and `Ok(false)` when it was
    /// a self-loop or a duplicate pair (the existing weight is kept).
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertex`] when an endpoint is out of range.
    pub fn insert(&mut self, weight: Weight, a: usize, b: usize) -> Result<bool> {
        for vertex in [a, b] {
            if vertex >= self.vertex_count {
                return Err(KruskalError::InvalidVertex {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        let Some(edge) = WeightedEdge::new(weight, a, b) else {
            return Ok(false);
        };
        Ok(self.push_new(edge))
    }

    fn push_new(&mut self, edge: WeightedEdge) -> bool {
        if !self.pairs.insert((edge.source, edge.target)) {
            return false;
        }
        self.edges.insert(edge)
    }

    /// Returns `true` when the unordered pair `{a, b}` has an edge.
    #[must_use]
    pub fn contains_pair(&self, a: usize, b: usize) -> bool {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.pairs.contains(&pair)
    }

    /// Removes and returns the lightest remaining edge.
    pub fn pop_lightest(&mut self) -> Option<WeightedEdge> {
        let edge = self.edges.pop_first()?;
        self.pairs.remove(&(edge.source, edge.target));
        Some(edge)
    }

    /// Returns the number of vertices the set ranges over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the edges in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, WeightedEdge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a WeightedEdge;
    type IntoIter = btree_set::Iter<'a, WeightedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
