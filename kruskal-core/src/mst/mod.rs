//! Sequential Kruskal minimum spanning tree construction.
//!
//! Edges are drained from an [`EdgeSet`] in ascending `(weight, source,
//! target)` order. Each candidate is checked against the forest of accepted
//! edges and accepted unless it would close a cycle. Construction stops once
//! the forest is a single tree or the set is exhausted.

use tracing::{debug, info, instrument};

use crate::cycle::{CycleCheck, DisjointSet};
use crate::edges::{EdgeSet, WeightedEdge};
use crate::matrix::Weight;

/// An edge accepted into the spanning tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl TreeEdge {
    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the endpoints as a `(source, target)` pair.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl From<WeightedEdge> for TreeEdge {
    fn from(edge: WeightedEdge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

/// The output of a Kruskal run.
///
/// Edges are kept in acceptance order. When the input graph is connected the
/// edges form a minimum spanning tree; otherwise they form a minimum spanning
/// forest with one tree per component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<TreeEdge>,
    total_weight: u64,
    component_count: usize,
}

impl SpanningTree {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the number of vertices the tree ranges over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the edges connect every vertex.
    #[must_use]
    pub const fn is_spanning(&self) -> bool {
        self.component_count <= 1
    }
}

/// Computes a minimum spanning tree using a disjoint-set cycle check.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, EdgeSet, kruskal};
///
/// let matrix = AdjacencyMatrix::from_edges(4, [(1, 0, 1), (2, 0, 2), (3, 1, 2), (4, 2, 3)])?;
/// let tree = kruskal(EdgeSet::from_matrix(&matrix));
/// let pairs: Vec<_> = tree.edges().iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (2, 3)]);
/// assert_eq!(tree.total_weight(), 7);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[must_use]
pub fn kruskal(edges: EdgeSet) -> SpanningTree {
    kruskal_with::<DisjointSet>(edges)
}

/// Computes a minimum spanning tree using the cycle check `C`.
///
/// The set is consumed: every edge is removed as it is considered. Any
/// [`CycleCheck`] yields the same edges in the same order.
#[instrument(
    name = "core.kruskal",
    skip(edges),
    fields(vertices = edges.vertex_count(), candidates = edges.len()),
)]
pub fn kruskal_with<C: CycleCheck>(mut edges: EdgeSet) -> SpanningTree {
    let vertex_count = edges.vertex_count();
    let target_edges = vertex_count.saturating_sub(1);
    let mut forest = C::with_vertices(vertex_count);
    let mut accepted = Vec::with_capacity(target_edges);
    let mut total_weight = 0_u64;
    let mut rejected = 0_usize;

    while accepted.len() < target_edges {
        let Some(edge) = edges.pop_lightest() else {
            break;
        };
        if forest.closes_cycle(edge.source(), edge.target()) {
            debug!(
                weight = edge.weight(),
                source = edge.source(),
                target = edge.target(),
                "rejected cycle-closing edge"
            );
            rejected = rejected.saturating_add(1);
            continue;
        }

        forest.commit(edge.source(), edge.target());
        total_weight = total_weight.saturating_add(u64::from(edge.weight()));
        debug!(
            weight = edge.weight(),
            source = edge.source(),
            target = edge.target(),
            "accepted edge"
        );
        accepted.push(TreeEdge::from(edge));
    }

    let component_count = forest.components();
    info!(
        accepted = accepted.len(),
        rejected,
        unconsidered = edges.len(),
        total_weight,
        components = component_count,
        "kruskal completed"
    );

    SpanningTree {
        vertex_count,
        edges: accepted,
        total_weight,
        component_count,
    }
}


#[cfg(test)]
mod property;
