//! Property 3: Determinism.
//!
//! Runs the MST builder on the same input several times and with both
//! cycle-check strategies, asserting that the exact accepted edge sequence
//! and total weight never change.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{CycleCheckStrategy, EdgeSet, KruskalBuilder, SpanningTree};

use super::types::GraphFixture;

/// Number of repeated runs compared against the baseline.
const REPETITIONS: usize = 3;

fn run(fixture: &GraphFixture, strategy: CycleCheckStrategy) -> SpanningTree {
    KruskalBuilder::new()
        .with_cycle_check(strategy)
        .build()
        .spanning_forest(EdgeSet::from_matrix(&fixture.matrix))
}

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let baseline = run(fixture, CycleCheckStrategy::DisjointSet);

    for repetition in 1..=REPETITIONS {
        let again = run(fixture, CycleCheckStrategy::DisjointSet);
        if again != baseline {
            return Err(TestCaseError::fail(format!(
                "run {repetition}: output diverged from baseline ({})",
                fixture.describe(),
            )));
        }
    }

    let walked = run(fixture, CycleCheckStrategy::AdjacencyWalk);
    if walked.edges() != baseline.edges() {
        let first_difference = walked
            .edges()
            .iter()
            .zip(baseline.edges())
            .position(|(left, right)| left != right);
        return Err(TestCaseError::fail(format!(
            "strategies disagree: adjacency walk accepted {} edges, disjoint set {} \
             (first difference at {first_difference:?}; {})",
            walked.edges().len(),
            baseline.edges().len(),
            fixture.describe(),
        )));
    }
    if walked.component_count() != baseline.component_count() {
        return Err(TestCaseError::fail(format!(
            "strategies disagree on component count: {} vs {} ({})",
            walked.component_count(),
            baseline.component_count(),
            fixture.describe(),
        )));
    }

    Ok(())
}
