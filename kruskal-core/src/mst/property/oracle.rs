//! Prim's algorithm oracle for MST property verification.
//!
//! A simple, trusted O(V²) Prim's implementation over the dense matrix. It
//! shares no code with the Kruskal path, so agreement on total weight is
//! meaningful evidence of minimality.

use crate::AdjacencyMatrix;

/// Result of the Prim's oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct PrimResult {
    /// Total weight of the MST, or `None` when the graph is disconnected.
    pub total_weight: Option<u64>,
    /// Number of edges in the tree grown from vertex 0.
    pub edge_count: usize,
}

/// Grows a minimum spanning tree from vertex 0 using Prim's algorithm.
///
/// The tree only covers the component containing vertex 0; when that
/// component is not the whole graph `total_weight` is `None`.
pub(super) fn prim(matrix: &AdjacencyMatrix) -> PrimResult {
    let vertex_count = matrix.vertex_count();
    if vertex_count == 0 {
        return PrimResult {
            total_weight: Some(0),
            edge_count: 0,
        };
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<u64>> = vec![None; vertex_count];
    best[0] = Some(0);
    let mut total: u64 = 0;
    let mut added = 0_usize;

    loop {
        let next = (0..vertex_count)
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| best[vertex].map(|cost| (cost, vertex)))
            .min();
        let Some((cost, vertex)) = next else {
            break;
        };
        in_tree[vertex] = true;
        total += cost;
        added += 1;

        for neighbour in 0..vertex_count {
            let weight = matrix.weight(vertex, neighbour).unwrap_or(0);
            if weight == 0 || in_tree[neighbour] {
                continue;
            }
            let weight = u64::from(weight);
            if best[neighbour].is_none_or(|current| weight < current) {
                best[neighbour] = Some(weight);
            }
        }
    }

    PrimResult {
        total_weight: (added == vertex_count).then_some(total),
        edge_count: added - 1,
    }
}
