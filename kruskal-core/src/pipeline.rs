//! Pipeline entry point tying connectivity, edge extraction and MST
//! construction together.

use tracing::{instrument, warn};

use crate::{
    Result,
    builder::CycleCheckStrategy,
    connectivity::reachable_from_origin,
    cycle::{AdjacencyForest, DisjointSet},
    edges::EdgeSet,
    error::KruskalError,
    matrix::AdjacencyMatrix,
    mst::{SpanningTree, kruskal_with},
};

/// Entry point for computing minimum spanning trees from adjacency matrices.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, KruskalBuilder};
///
/// let triangle = AdjacencyMatrix::from_edges(3, [(1, 0, 1), (1, 1, 2), (1, 0, 2)])?;
/// let tree = KruskalBuilder::new().build().compute(&triangle)?;
/// assert_eq!(tree.edges().len(), 2);
/// assert_eq!(tree.total_weight(), 2);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Kruskal {
    cycle_check: CycleCheckStrategy,
}

impl Kruskal {
    pub(crate) const fn new(cycle_check: CycleCheckStrategy) -> Self {
        Self { cycle_check }
    }

    /// Returns the cycle-check strategy used by [`Kruskal::compute`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn cycle_check(&self) -> CycleCheckStrategy { self.cycle_check }

    /// Computes the minimum spanning tree of `matrix`.
    ///
    /// The graph must be connected; the MST builder does not run otherwise.
    ///
    /// # Errors
    /// Returns [`KruskalError::Disconnected`] when some vertex is unreachable
    /// from vertex 0.
    #[instrument(
        name = "core.compute",
        err,
        skip(self, matrix),
        fields(vertices = matrix.vertex_count(), strategy = ?self.cycle_check),
    )]
    pub fn compute(&self, matrix: &AdjacencyMatrix) -> Result<SpanningTree> {
        let vertex_count = matrix.vertex_count();
        let reached = reachable_from_origin(matrix);
        if vertex_count > 0 && reached < vertex_count {
            warn!(reached, vertex_count, "graph is disconnected, skipping MST");
            return Err(KruskalError::Disconnected {
                vertex_count,
                reached,
            });
        }

        Ok(self.spanning_forest(EdgeSet::from_matrix(matrix)))
    }

    /// Runs the MST builder directly on `edges` without a connectivity gate.
    ///
    /// Disconnected inputs produce a minimum spanning forest.
    #[must_use]
    pub fn spanning_forest(&self, edges: EdgeSet) -> SpanningTree {
        match self.cycle_check {
            CycleCheckStrategy::DisjointSet => kruskal_with::<DisjointSet>(edges),
            CycleCheckStrategy::AdjacencyWalk => kruskal_with::<AdjacencyForest>(edges),
        }
    }
}
