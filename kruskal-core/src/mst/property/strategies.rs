//! Strategy builders for MST property-based tests.
//!
//! Every connected generator starts from a random spanning tree so the graph
//! is guaranteed connected, then sprinkles extra edges on top. Weights are
//! drawn according to the fixture's [`WeightDistribution`].

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{AdjacencyMatrix, Weight};

use super::types::{GraphFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates graph fixtures covering all five weight distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    let matrix = AdjacencyMatrix::from_edges(vertex_count, edges)
        .expect("generated edges stay within the vertex range");
    GraphFixture {
        matrix,
        distribution,
    }
}

type GeneratedEdges = (usize, Vec<(Weight, usize, usize)>);

/// Returns the vertex pairs of a random spanning tree over `vertices`.
fn random_tree(vertices: &[usize], rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut order = vertices.to_vec();
    order.shuffle(rng);
    (1..order.len())
        .map(|index| {
            let parent = order[rng.gen_range(0..index)];
            (parent, order[index])
        })
        .collect()
}

/// Returns the pairs of a random spanning tree plus every other pair kept
/// with probability `extra_probability`.
fn tree_with_extras(
    vertex_count: usize,
    extra_probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let mut pairs = random_tree(&vertices, rng);
    let mut present = vec![false; vertex_count * vertex_count];
    for &(a, b) in &pairs {
        present[a * vertex_count + b] = true;
        present[b * vertex_count + a] = true;
    }
    for a in 0..vertex_count {
        for b in (a + 1)..vertex_count {
            if !present[a * vertex_count + b] && rng.gen_bool(extra_probability) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

// ── Unique weights ──────────────────────────────────────────────────────

fn generate_unique(rng: &mut SmallRng) -> GeneratedEdges {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let extra = rng.gen_range(0.1..=0.5);
    let pairs = tree_with_extras(vertex_count, extra, rng);
    let mut weights: Vec<Weight> = (1..=pairs.len())
        .map(|weight| Weight::try_from(weight).expect("pair count fits in a weight"))
        .collect();
    weights.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((a, b), weight)| (weight, a, b))
        .collect();
    (vertex_count, edges)
}

// ── Many identical weights ──────────────────────────────────────────────

fn generate_identical(rng: &mut SmallRng) -> GeneratedEdges {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let extra = rng.gen_range(0.2..=0.6);
    let edges = tree_with_extras(vertex_count, extra, rng)
        .into_iter()
        .map(|(a, b)| (rng.gen_range(1..=3), a, b))
        .collect();
    (vertex_count, edges)
}

// ── Sparse ──────────────────────────────────────────────────────────────

fn generate_sparse(rng: &mut SmallRng) -> GeneratedEdges {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let mut edges: Vec<(Weight, usize, usize)> = random_tree(&vertices, rng)
        .into_iter()
        .map(|(a, b)| (rng.gen_range(1..=50), a, b))
        .collect();
    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b {
            edges.push((rng.gen_range(1..=50), a, b));
        }
    }
    (vertex_count, edges)
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> GeneratedEdges {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let extra = rng.gen_range(0.7..=0.95);
    let edges = tree_with_extras(vertex_count, extra, rng)
        .into_iter()
        .map(|(a, b)| (rng.gen_range(1..=1_000), a, b))
        .collect();
    (vertex_count, edges)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Splits the vertices into 2-4 groups and builds a random tree inside each
/// group, leaving no edges between groups.
fn generate_disconnected(rng: &mut SmallRng) -> GeneratedEdges {
    let vertex_count = rng.gen_range(4..=MAX_VERTICES);
    let group_count = rng.gen_range(2..=4);
    let mut vertices: Vec<usize> = (0..vertex_count).collect();
    vertices.shuffle(rng);

    let mut groups = vec![Vec::new(); group_count];
    for (index, vertex) in vertices.into_iter().enumerate() {
        groups[index % group_count].push(vertex);
    }

    let mut edges = Vec::new();
    for group in &groups {
        for (a, b) in random_tree(group, rng) {
            edges.push((rng.gen_range(1..=20), a, b));
        }
        for &a in group {
            for &b in group {
                if a < b && rng.gen_bool(0.2) {
                    edges.push((rng.gen_range(1..=20), a, b));
                }
            }
        }
    }
    (vertex_count, edges)
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually so the tie-heavy distribution is sampled more often.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
