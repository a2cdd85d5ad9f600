//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the MST builder without the connectivity
//! gate, verifies:
//!
//! - **Canonical form**: `source < target` for all edges.
//! - **Real edges**: every accepted edge exists in the matrix with the
//!   reported weight.
//! - **Acyclicity**: no cycles (union-find based detection).
//! - **Component count**: matches the input graph's component count.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Ascending order**: edges are accepted in non-decreasing weight.
//! - **Total weight**: equals the sum of the accepted edge weights.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeSet, KruskalBuilder, SpanningTree, TreeEdge};

use super::helpers::{count_components, find_root};
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = KruskalBuilder::new()
        .build()
        .spanning_forest(EdgeSet::from_matrix(&fixture.matrix));

    validate_edges(forest.edges(), |i, edge| {
        (edge.source() >= edge.target()).then(|| {
            format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target()
            )
        })
    })?;
    validate_edges(forest.edges(), |i, edge| {
        let stored = fixture.matrix.weight(edge.source(), edge.target());
        (stored != Some(edge.weight())).then(|| {
            format!(
                "edge {i}: ({}, {}) has weight {} but matrix holds {stored:?}",
                edge.source(),
                edge.target(),
                edge.weight(),
            )
        })
    })?;
    validate_acyclicity(&forest)?;
    validate_component_count(fixture, &forest)?;
    validate_ascending_order(forest.edges())?;
    validate_total_weight(&forest)?;

    Ok(())
}

/// Generic edge validator that applies a predicate to each edge, returning
/// early with an error if the predicate produces a message.
fn validate_edges<F>(edges: &[TreeEdge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &TreeEdge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Detects cycles in the output using union-find.
fn validate_acyclicity(forest: &SpanningTree) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..forest.vertex_count()).collect();
    for (i, edge) in forest.edges().iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

/// Verifies the forest has one tree per input component and `n - c` edges.
fn validate_component_count(fixture: &GraphFixture, forest: &SpanningTree) -> TestCaseResult {
    let expected = count_components(&fixture.matrix);
    if forest.component_count() != expected {
        return Err(TestCaseError::fail(format!(
            "component count {}, input has {expected} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    let edge_target = forest.vertex_count().saturating_sub(expected);
    if forest.edges().len() != edge_target {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {edge_target} ({})",
            forest.edges().len(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Verifies edges were accepted in non-decreasing weight order.
fn validate_ascending_order(edges: &[TreeEdge]) -> TestCaseResult {
    for (i, window) in edges.windows(2).enumerate() {
        if window[0].weight() > window[1].weight() {
            return Err(TestCaseError::fail(format!(
                "edge {}: weight {} accepted after heavier weight {}",
                i + 1,
                window[1].weight(),
                window[0].weight(),
            )));
        }
    }
    Ok(())
}

/// Verifies the reported total matches the accepted edges.
fn validate_total_weight(forest: &SpanningTree) -> TestCaseResult {
    let sum: u64 = forest
        .edges()
        .iter()
        .map(|edge| u64::from(edge.weight()))
        .sum();
    if sum != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from edge sum {sum}",
            forest.total_weight(),
        )));
    }
    Ok(())
}
