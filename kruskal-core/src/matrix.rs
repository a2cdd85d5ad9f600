//! Dense weighted adjacency matrix.
//!
//! Entry `(i, j)` holds the weight of the edge between vertices `i` and `j`;
//! zero means there is no edge. The matrix is stored row-major in a single
//! buffer.

use std::fmt;

use crate::error::{KruskalError, Result};

/// Edge weight as read from the input. Zero encodes "no edge".
pub type Weight = u32;

/// Square weighted adjacency matrix over `vertex_count` vertices.
///
/// # Examples
/// ```
/// use kruskal_core::AdjacencyMatrix;
///
/// let matrix = AdjacencyMatrix::from_rows(vec![vec![0, 3], vec![3, 0]])?;
/// assert_eq!(matrix.vertex_count(), 2);
/// assert_eq!(matrix.weight(0, 1), Some(3));
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates a matrix with no edges.
    ///
    /// Returns `None` when `vertex_count²` entries cannot be allocated,
    /// either because the size overflows or the allocator refuses it.
    #[must_use]
    pub fn empty(vertex_count: usize) -> Option<Self> {
        let len = vertex_count.checked_mul(vertex_count)?;
        let mut weights = Vec::new();
        weights.try_reserve_exact(len).ok()?;
        weights.resize(len, 0);
        Some(Self {
            vertex_count,
            weights,
        })
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertex`] naming the first row whose
    /// length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let vertex_count = rows.len();
        let mut weights = Vec::with_capacity(vertex_count.saturating_mul(vertex_count));
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != vertex_count {
                return Err(KruskalError::InvalidVertex {
                    vertex: index,
                    vertex_count,
                });
            }
            weights.extend(row);
        }
        Ok(Self {
            vertex_count,
            weights,
        })
    }

    /// Builds a symmetric matrix from `(weight, a, b)` triples.
    ///
    /// Later triples overwrite earlier ones for the same pair.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertex`] when an endpoint is not below
    /// `vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::from_edges(3, [(5, 0, 2)])?;
    /// assert_eq!(matrix.weight(2, 0), Some(5));
    /// assert!(!matrix.has_edge(0, 1));
    /// # Ok::<(), kruskal_core::KruskalError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Weight, usize, usize)>,
    ) -> Result<Self> {
        let mut matrix = Self::empty(vertex_count).ok_or(KruskalError::InvalidVertex {
            vertex: vertex_count,
            vertex_count,
        })?;
        for (weight, a, b) in edges {
            matrix.set(a, b, weight)?;
            matrix.set(b, a, weight)?;
        }
        Ok(matrix)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight stored at `(row, column)`, or `None` when out of range.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<Weight> {
        self.index(row, column)
            .and_then(|index| self.weights.get(index).copied())
    }

    /// Returns `true` when `(row, column)` holds a non-zero weight.
    #[must_use]
    pub fn has_edge(&self, row: usize, column: usize) -> bool {
        self.weight(row, column).is_some_and(|weight| weight != 0)
    }

    /// Returns the entries of `row`, or an empty slice when out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Weight] {
        let start = row.saturating_mul(self.vertex_count);
        let end = start.saturating_add(self.vertex_count);
        self.weights.get(start..end).unwrap_or_default()
    }

    /// Overwrites the entry at `(row, column)`.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertex`] when either index is out of range.
    pub fn set(&mut self, row: usize, column: usize, weight: Weight) -> Result<()> {
        let vertex_count = self.vertex_count;
        let slot = self
            .index(row, column)
            .and_then(|index| self.weights.get_mut(index))
            .ok_or(KruskalError::InvalidVertex {
                vertex: row.max(column),
                vertex_count,
            })?;
        *slot = weight;
        Ok(())
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [Weight] {
        &mut self.weights
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.vertex_count || column >= self.vertex_count {
            return None;
        }
        row.checked_mul(self.vertex_count)?.checked_add(column)
    }
}

/// Renders the matrix in the text form accepted by
/// [`load_matrix`](crate::load_matrix): the vertex count, then one line per row.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count)?;
        for row in 0..self.vertex_count {
            let mut entries = self.row(row).iter();
            if let Some(first) = entries.next() {
                write!(f, "{first}")?;
            }
            for weight in entries {
                write!(f, " {weight}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
