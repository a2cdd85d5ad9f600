//! Breadth-first connectivity check over an adjacency matrix.

use std::collections::VecDeque;

use crate::matrix::AdjacencyMatrix;

/// Counts the vertices reachable from vertex 0, including vertex 0 itself.
///
/// An edge `(i, j)` exists when entry `(i, j)` is non-zero. Returns zero for
/// an empty graph.
#[must_use]
pub fn reachable_from_origin(matrix: &AdjacencyMatrix) -> usize {
    let vertex_count = matrix.vertex_count();
    if vertex_count == 0 {
        return 0;
    }

    let mut visited = vec![false; vertex_count];
    let mut queue = VecDeque::from([0_usize]);
    if let Some(origin) = visited.first_mut() {
        *origin = true;
    }
    let mut reached = 1_usize;

    while let Some(vertex) = queue.pop_front() {
        for (neighbour, &weight) in matrix.row(vertex).iter().enumerate() {
            if weight == 0 {
                continue;
            }
            if let Some(seen) = visited.get_mut(neighbour)
                && !*seen
            {
                *seen = true;
                reached += 1;
                queue.push_back(neighbour);
            }
        }
    }

    reached
}

/// Returns `true` when every vertex is reachable from vertex 0.
///
/// Graphs with zero or one vertex are trivially connected.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, is_connected};
///
/// let path = AdjacencyMatrix::from_edges(3, [(1, 0, 1), (1, 1, 2)])?;
/// assert!(is_connected(&path));
///
/// let split = AdjacencyMatrix::from_edges(4, [(1, 0, 1), (1, 2, 3)])?;
/// assert!(!is_connected(&split));
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[must_use]
pub fn is_connected(matrix: &AdjacencyMatrix) -> bool {
    reachable_from_origin(matrix) == matrix.vertex_count()
}
