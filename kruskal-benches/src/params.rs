//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Percentage of vertex pairs joined by an edge.
    pub density_percent: u8,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.vertex_count, self.density_percent)
    }
}
