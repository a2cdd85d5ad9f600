//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and further pairs are joined with the requested probability.

use kruskal_core::{AdjacencyMatrix, Weight};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested density was above 100 percent.
    #[error("density must be at most 100%, got {percent}%")]
    DensityOutOfRange {
        /// Requested density.
        percent: u8,
    },
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Percentage of non-tree vertex pairs joined by an edge.
    pub density_percent: u8,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph and its adjacency matrix.
///
/// # Examples
///
/// ```
/// use kruskal_benches::source::{SyntheticConfig, SyntheticGraph};
/// use kruskal_core::is_connected;
///
/// let config = SyntheticConfig { vertex_count: 10, density_percent: 20, max_weight: 9, seed: 7 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.matrix().vertex_count(), 10);
/// assert!(is_connected(graph.matrix()));
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    matrix: AdjacencyMatrix,
    edge_count: usize,
}

impl SyntheticGraph {
    /// Generates a graph eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchSetupError::Synthetic`] for an invalid configuration
    /// and [`BenchSetupError::Kruskal`] when the matrix cannot be allocated.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices.into());
        }
        if config.density_percent > 100 {
            return Err(SyntheticError::DensityOutOfRange {
                percent: config.density_percent,
            }
            .into());
        }
        if config.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight.into());
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = random_tree(config.vertex_count, &mut rng);
        let tree = AdjacencyMatrix::from_edges(
            config.vertex_count,
            edges.iter().map(|&(a, b)| (1, a, b)),
        )?;

        for a in 0..config.vertex_count {
            for b in a.saturating_add(1)..config.vertex_count {
                if !tree.has_edge(a, b) && rng.gen_range(0..100_u8) < config.density_percent {
                    edges.push((a, b));
                }
            }
        }

        let edge_count = edges.len();
        let matrix = AdjacencyMatrix::from_edges(
            config.vertex_count,
            edges
                .into_iter()
                .map(|(a, b)| (rng.gen_range(1..=config.max_weight), a, b)),
        )?;
        Ok(Self { matrix, edge_count })
    }

    /// Returns the generated adjacency matrix.
    #[must_use]
    #[rustfmt::skip]
    pub const fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Returns the number of undirected edges in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }
}

fn random_tree(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    let mut pairs = Vec::with_capacity(vertex_count.saturating_sub(1));
    for (index, &vertex) in order.iter().enumerate().skip(1) {
        if let Some(&parent) = order.get(rng.gen_range(0..index)) {
            pairs.push((parent, vertex));
        }
    }
    pairs
}
