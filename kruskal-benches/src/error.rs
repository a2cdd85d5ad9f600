//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use kruskal_core::{KruskalError, LoadError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building the adjacency matrix failed.
    #[error("matrix construction failed: {0}")]
    Kruskal(#[from] KruskalError),
    /// Parsing the rendered matrix text failed.
    #[error("matrix parsing failed: {0}")]
    Load(#[from] LoadError),
}
